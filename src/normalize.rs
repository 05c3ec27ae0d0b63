// src/normalize.rs
use chrono::NaiveDate;

use crate::config::consts::{ AREA_COLUMN, CASES_COLUMNS };
use crate::core::sanitize::{ is_aggregate_area, parse_count };
use crate::data::{ RawTable, Record };
use crate::error::ScrapeError;

/// Turn one scraped table into records for `date`.
///
/// - Cases come from the first of `CASES_COLUMNS` present, area from `AREA_COLUMN`.
/// - Every row's count is coerced first: the em-dash placeholder counts as 0,
///   any other non-integer is an error, aggregate rows included.
/// - Rows whose area contains `Total` or `Pending` are then dropped.
pub fn normalize_table(table: &RawTable, date: NaiveDate) -> Result<Vec<Record>, ScrapeError> {
    let missing = |wanted: &[&str]| ScrapeError::MissingColumn {
        date,
        wanted: wanted.iter().map(|s| s.to_string()).collect(),
        found: table.headers.clone(),
    };
    let cases_col = table.column_any(&CASES_COLUMNS).ok_or_else(|| missing(&CASES_COLUMNS))?;
    let area_col = table.column(AREA_COLUMN).ok_or_else(|| missing(&[AREA_COLUMN]))?;

    let mut out = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;

    for row in &table.rows {
        let area = row.get(area_col).map(String::as_str).unwrap_or_default();
        let raw = row.get(cases_col).map(String::as_str).unwrap_or_default();
        let cases = parse_count(raw).ok_or_else(|| ScrapeError::InvalidCount {
            date,
            area: area.to_string(),
            value: raw.to_string(),
        })?;

        if is_aggregate_area(area) {
            dropped += 1;
            continue;
        }

        out.push(Record::new(area, cases, date));
    }

    if dropped > 0 {
        logd!("{date}: dropped {dropped} aggregate rows");
    }
    Ok(out)
}
