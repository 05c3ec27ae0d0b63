// src/data.rs
//
// Shapes that flow through the pipeline:
//
// - RawTable:   one scraped HTML table, header texts + cell texts, untyped.
// - DateBlock:  the date a table was published under.
// - DatedTable: the pair of the two, in page order.
// - Record:     the normalized (area, cases, date) unit that gets written out.

use chrono::NaiveDate;
use serde::{ Deserialize, Deserializer, Serialize };

/// Serialized column order is the output schema: `area,cases,date`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub area: String,
    pub cases: u32,
    #[serde(deserialize_with = "lenient_date")]
    pub date: NaiveDate,
}

impl Record {
    pub fn new(area: impl Into<String>, cases: u32, date: NaiveDate) -> Self {
        Self { area: area.into(), cases, date }
    }
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// History files have been written by more than one tool; accept a bare
/// ISO date, an ISO date followed by a time, or US-style `M/D/YYYY`.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split([' ', 'T']).next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn lenient_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(d)?;
    parse_loose_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("not a calendar date: {raw:?}")))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateBlock {
    /// Link text as it appeared on the page.
    pub raw: String,
    pub date: NaiveDate,
}

/// Header row + body rows. Short rows are allowed; missing cells read as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// First of `names` present in the header, in the order given.
    pub fn column_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.column(n))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatedTable {
    pub date: DateBlock,
    pub table: RawTable,
}
