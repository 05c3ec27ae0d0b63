// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{ DEFAULT_HISTORY_PATH, DEFAULT_PAGE_PATH, TITLE_ID_PREFIX };
use crate::config::options::{ default_out_path, ExportFormat, RunOptions };
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::runner::{ self, RunSummary };

/// Every flag defaults to the fixed layout, so a bare invocation needs none.
#[derive(Debug, Parser)]
#[command(
    name = "sbcovid_scrape",
    version,
    about = "Extract cumulative COVID-19 cases by geographic area from a cached status page"
)]
pub struct Cli {
    /// Cached status page (HTML).
    #[arg(long, default_value = DEFAULT_PAGE_PATH)]
    pub page: PathBuf,

    /// Historical records (area, cases, date); `.tsv` is read tab-separated.
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: PathBuf,

    /// Output file. Defaults to out/cases_by_area.<format>.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output delimiter.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Id prefix of the per-update title containers.
    #[arg(long, default_value = TITLE_ID_PREFIX)]
    pub title_prefix: String,

    /// Debug-level logging (ignored when RUST_LOG is set).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            out_path: self.out.unwrap_or_else(|| default_out_path(self.format)),
            page_path: self.page,
            history_path: self.history,
            format: self.format,
            title_id_prefix: self.title_prefix,
        }
    }
}

/// Forwards runner progress to the log.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { logf!("Normalizing {total} dated tables"); }
    fn item_done(&mut self, label: &str, rows: usize) { logd!("{label}: {rows} area rows"); }
}

pub fn run() -> Result<RunSummary, ScrapeError> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.into_options();
    let summary = runner::run(&opts, Some(&mut LogProgress))?;

    println!(
        "Wrote {} rows ({} live from {} blocks, {} duplicates dropped, {} historical) to {}",
        summary.total_rows,
        summary.live_rows - summary.duplicates_dropped,
        summary.blocks,
        summary.duplicates_dropped,
        summary.history_rows,
        summary.out_path.display(),
    );
    Ok(summary)
}
