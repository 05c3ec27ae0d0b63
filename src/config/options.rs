// src/config/options.rs
use std::path::{ Path, PathBuf };

use clap::ValueEnum;

use super::consts::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }

    /// `.tsv` (any case) reads as TSV; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

/// Everything one run needs. `Default` is the fixed-path behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub page_path: PathBuf,
    pub history_path: PathBuf,
    pub out_path: PathBuf,
    pub format: ExportFormat,
    pub title_id_prefix: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            page_path: PathBuf::from(DEFAULT_PAGE_PATH),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            out_path: default_out_path(ExportFormat::Csv),
            format: ExportFormat::Csv,
            title_id_prefix: TITLE_ID_PREFIX.to_string(),
        }
    }
}

pub fn default_out_path(format: ExportFormat) -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(format!("{DEFAULT_FILE}.{}", format.ext()))
}
