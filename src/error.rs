// src/error.rs
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Every failure is fatal for the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("cannot read input {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /* ---------------- page structure ---------------- */

    #[error("no date/table block pairs found on the page")]
    NoBlocks,

    #[error("block {block}: title container has no hyperlink")]
    MissingLink { block: usize },

    #[error("block {block}: no \"Month Day, Year\" date in {text:?}")]
    MissingDate { block: usize, text: String },

    #[error("block {block}: not a calendar date: {text:?}")]
    InvalidDate { block: usize, text: String },

    #[error("block {block}: no table with a header row")]
    NoTable { block: usize },

    /* ---------------- table contents ---------------- */

    #[error("table for {date}: none of {wanted:?} among columns {found:?}")]
    MissingColumn {
        date: NaiveDate,
        wanted: Vec<String>,
        found: Vec<String>,
    },

    #[error("table for {date}: area {area:?} has non-numeric case count {value:?}")]
    InvalidCount {
        date: NaiveDate,
        area: String,
        value: String,
    },

    #[error("malformed history file {}: {source}", path.display())]
    InvalidHistory {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /* ---------------- output ---------------- */

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
}
