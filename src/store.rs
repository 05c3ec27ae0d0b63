// src/store.rs
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::options::ExportFormat;
use crate::csv::read_records;
use crate::data::Record;
use crate::error::ScrapeError;

/// Load the historical cache. Delimiter follows the extension (`.tsv` or CSV).
/// Rows are returned exactly as stored, in file order.
pub fn load_history(path: &Path) -> Result<Vec<Record>, ScrapeError> {
    let file = File::open(path).map_err(|source| ScrapeError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;

    let format = ExportFormat::from_path(path);
    let rows = read_records(BufReader::new(file), format).map_err(|source| {
        ScrapeError::InvalidHistory { path: path.to_path_buf(), source }
    })?;

    if rows.is_empty() {
        logw!("History file {} has no rows", path.display());
    } else {
        logd!("History: {} rows from {}", rows.len(), path.display());
    }
    Ok(rows)
}
