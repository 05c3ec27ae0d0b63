// src/aggregate.rs
use std::collections::HashSet;

use crate::data::Record;

/// Stable dedup on (area, date): the first record seen for a key wins and
/// later ones are discarded. Returns the survivors and how many were dropped.
///
/// First-wins relies on the page listing its most recent edit of a date
/// first. If the page ever reverses that ordering this is the rule to flip.
pub fn dedup_first(records: Vec<Record>) -> (Vec<Record>, usize) {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|r| seen.insert((r.area.clone(), r.date)))
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

/// Live records first, then history exactly as loaded. History is never
/// deduplicated, against itself or against live rows.
pub fn merge_history(mut live: Vec<Record>, history: Vec<Record>) -> Vec<Record> {
    live.extend(history);
    live
}
