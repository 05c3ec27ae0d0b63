// src/core/sanitize.rs
use crate::config::consts::{ AGGREGATE_MARKERS, NBSP, PLACEHOLDER_DASH };

/// Drop every non-breaking space. Removed, not replaced.
pub fn strip_nbsp(s: &str) -> String {
    s.chars().filter(|&c| c != NBSP).collect()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case count from a cell: the em-dash placeholder is 0, otherwise a
/// non-negative integer, optionally with `,` thousands separators.
/// `None` for anything else (including an empty cell).
pub fn parse_count(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if cell.starts_with(PLACEHOLDER_DASH) && cell.len() == PLACEHOLDER_DASH.len_utf8() {
        return Some(0);
    }
    let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());

    let mut groups = cell.split(',');
    let head = groups.next().unwrap_or_default();
    if !cell.contains(',') {
        return if all_digits(head) { head.parse().ok() } else { None };
    }

    // 1-3 leading digits, then groups of exactly three
    if !all_digits(head) || head.len() > 3 {
        return None;
    }
    let mut digits = head.to_string();
    for g in groups {
        if g.len() != 3 || !all_digits(g) {
            return None;
        }
        digits.push_str(g);
    }
    digits.parse().ok()
}

/// Case-sensitive substring test against the aggregate markers.
pub fn is_aggregate_area(area: &str) -> bool {
    AGGREGATE_MARKERS.iter().any(|m| area.contains(m))
}
