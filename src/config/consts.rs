// src/config/consts.rs

// Local inputs (fetched by an external step)
pub const DEFAULT_PAGE_PATH: &str = "cache/status_page.html";
pub const DEFAULT_HISTORY_PATH: &str = "data/historical_cases.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "cases_by_area";

// Page structure
pub const TITLE_ID_PREFIX: &str = "tab-title";

// Column labels as they have appeared on the page over time.
// Cases fallbacks are tried in order.
pub const AREA_COLUMN: &str = "Geographic Area";
pub const CASES_COLUMNS: [&str; 2] = ["Total Confirmed Cases", "Confirmed Cases"];

// Rows whose area contains any of these are not real areas
pub const AGGREGATE_MARKERS: [&str; 2] = ["Total", "Pending"];

// Typography
pub const PLACEHOLDER_DASH: char = '\u{2014}';
pub const NBSP: char = '\u{a0}';
