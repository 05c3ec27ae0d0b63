// src/specs/status_page.rs
//! Page parser for the county status page.
//!
//! The page publishes one tab per update. Each tab is a title container
//! (`id` starting with the title prefix) holding a link whose text carries
//! the date, immediately followed by a sibling element holding the table of
//! cases by geographic area.
//!
//! Labels and markup have drifted over time, so a tab is recognised by text
//! alone: some cell mentions the area label and some cell mentions a
//! confirmed-cases label. Tabs whose table talks about anything else
//! (testing, hospital beds, ...) are skipped.
//!
//! Output is page order. Nothing here filters rows or coerces values;
//! that is `normalize`'s job.

use std::sync::LazyLock;
use std::time::Instant;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ ElementRef, Html };

use crate::config::consts::{ AREA_COLUMN, CASES_COLUMNS };
use crate::core::html::{
    cell_texts, has_td, has_th, next_element_sibling, own_rows, tables_within, text_of,
    CELL, LINK, WITH_ID,
};
use crate::data::{ DateBlock, DatedTable, RawTable };
use crate::error::ScrapeError;

/// "May 1, 2020", "Sep. 3, 2020", "Sept. 3, 2020"
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]{2,8})\.?\s+(\d{1,2}),\s*(\d{4})").expect("static regex")
});

/// A title container and the sibling that holds its table.
#[derive(Clone, Copy, Debug)]
pub struct BlockPair<'a> {
    pub title: ElementRef<'a>,
    pub body: ElementRef<'a>,
}

/// Parse a whole page into dated tables, page order.
pub fn parse_doc(html_doc: &str, id_prefix: &str) -> Result<Vec<DatedTable>, ScrapeError> {
    let t = Instant::now();
    let doc = Html::parse_document(html_doc);
    logd!("Status page: parsed tree in {:?}", t.elapsed());

    let blocks = locate_blocks(&doc, id_prefix);
    if blocks.is_empty() {
        return Err(ScrapeError::NoBlocks);
    }

    let mut out = Vec::with_capacity(blocks.len());
    for (i, pair) in blocks.into_iter().enumerate() {
        let block = i + 1;
        let date = parse_block_date(pair.title, block)?;
        let table = extract_table(pair.body).ok_or(ScrapeError::NoTable { block })?;
        logd!("Block {block}: {} ({} rows)", date.date, table.rows.len());
        out.push(DatedTable { date, table });
    }
    logd!("Status page: extracted {} tables in {:?}", out.len(), t.elapsed());
    Ok(out)
}

/* ---------------- Block locator ---------------- */

pub fn locate_blocks<'a>(doc: &'a Html, id_prefix: &str) -> Vec<BlockPair<'a>> {
    let mut out = Vec::new();
    let mut inspected = 0usize;

    for title in doc.select(&WITH_ID) {
        let id = title.value().attr("id").unwrap_or_default();
        if !id.starts_with(id_prefix) {
            continue;
        }
        inspected += 1;

        match next_element_sibling(title) {
            Some(body) if holds_case_table(body) => out.push(BlockPair { title, body }),
            _ => logd!("Skipping #{id}: no case table follows it"),
        }
    }

    logf!("Matched {} of {} title containers", out.len(), inspected);
    out
}

fn holds_case_table(body: ElementRef<'_>) -> bool {
    tables_within(body).into_iter().any(has_case_markers)
}

/// Loose match on cell text, not on column schema.
fn has_case_markers(table: ElementRef<'_>) -> bool {
    let cells: Vec<String> = table.select(&CELL).map(text_of).collect();
    let has_area = cells.iter().any(|c| c.contains(AREA_COLUMN));
    let has_cases = cells
        .iter()
        .any(|c| CASES_COLUMNS.iter().any(|label| c.contains(label)));
    has_area && has_cases
}

/* ---------------- Date parser ---------------- */

/// Date from the first link in the title container. `block` is 1-based, for errors.
pub fn parse_block_date(title: ElementRef<'_>, block: usize) -> Result<DateBlock, ScrapeError> {
    let link = if title.value().name().eq_ignore_ascii_case("a") {
        Some(title)
    } else {
        title.select(&LINK).next()
    };
    let text = text_of(link.ok_or(ScrapeError::MissingLink { block })?);

    let Some(caps) = DATE_RE.captures(&text) else {
        return Err(ScrapeError::MissingDate { block, text: text.clone() });
    };
    // %B takes full names and three-letter abbreviations, but not "Sept"
    let month = match &caps[1] {
        "Sept" => "Sep",
        m => m,
    };
    let canonical = format!("{month} {}, {}", &caps[2], &caps[3]);
    let date = NaiveDate::parse_from_str(&canonical, "%B %d, %Y")
        .map_err(|_| ScrapeError::InvalidDate { block, text: canonical.clone() })?;

    Ok(DateBlock { raw: text, date })
}

/* ---------------- Table extractor ---------------- */

/// First table in `body` with a `<th>` header row. If no table there has
/// one, the first table, reading its first row as the header.
pub fn extract_table(body: ElementRef<'_>) -> Option<RawTable> {
    let tables = tables_within(body);
    tables
        .iter()
        .find_map(|&t| read_table(t, true))
        .or_else(|| tables.first().and_then(|&t| read_table(t, false)))
}

fn read_table(table: ElementRef<'_>, require_th: bool) -> Option<RawTable> {
    let rows = own_rows(table);
    let header_ix = if require_th {
        rows.iter().position(|&r| has_th(r))?
    } else if rows.is_empty() {
        return None;
    } else {
        0
    };

    let headers = cell_texts(rows[header_ix]);
    if headers.is_empty() {
        return None;
    }

    let body = rows[header_ix + 1..]
        .iter()
        .filter(|&&r| has_td(r))
        .map(|&r| cell_texts(r))
        .collect();

    Some(RawTable { headers, rows: body })
}
