// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::config::options::ExportFormat;
use crate::core::sanitize::strip_nbsp;
use crate::csv::write_records;
use crate::data::Record;
use crate::error::ScrapeError;

/// Read the cached status page and drop its non-breaking spaces.
pub fn read_page(path: &Path) -> Result<String, ScrapeError> {
    let raw = fs::read_to_string(path).map_err(|source| ScrapeError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    logd!("Page: {} bytes from {}", raw.len(), path.display());
    Ok(strip_nbsp(&raw))
}

/// Create/truncate `path` (and its parent dirs) and write all records.
pub fn write_output(path: &Path, records: &[Record], format: ExportFormat) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_records(&mut out, records, format)?;
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
