// tests/pipeline_e2e.rs
//
// Full runs against the saved page under tests/fixtures/.
//
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use sbcovid_scrape::config::options::{ ExportFormat, RunOptions };
use sbcovid_scrape::{ runner, Record, ScrapeError };

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, m, d).unwrap()
}

fn opts_into(dir: &tempfile::TempDir) -> RunOptions {
    RunOptions {
        page_path: fixture("status_page.html"),
        history_path: fixture("historical_cases.csv"),
        out_path: dir.path().join("out").join("cases_by_area.csv"),
        ..RunOptions::default()
    }
}

#[test]
fn fixture_page_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_into(&dir);

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.blocks, 3);
    assert_eq!(summary.live_rows, 10);
    assert_eq!(summary.duplicates_dropped, 2);
    assert_eq!(summary.history_rows, 3);
    assert_eq!(summary.total_rows, 11);

    let written = fs::read_to_string(&opts.out_path).unwrap();
    assert_eq!(
        written,
        "area,cases,date\n\
         Santa Maria,1052,2020-05-04\n\
         Goleta,14,2020-05-04\n\
         Isla Vista,0,2020-05-04\n\
         Lompoc,33,2020-05-04\n\
         Orcutt,41,2020-05-04\n\
         Goleta,12,2020-05-01\n\
         Lompoc,30,2020-05-01\n\
         Orcutt,4,2020-05-01\n\
         Isla Vista,3,2020-04-27\n\
         Goleta,10,2020-04-27\n\
         Goleta,9,2020-04-26\n"
    );
}

#[test]
fn output_never_holds_aggregate_areas() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_into(&dir);
    runner::run(&opts, None).unwrap();

    let text = fs::read_to_string(&opts.out_path).unwrap();
    let rows = sbcovid_scrape::csv::read_records(text.as_bytes(), ExportFormat::Csv).unwrap();
    assert!(rows.iter().all(|r| !r.area.contains("Total") && !r.area.contains("Pending")));
}

#[test]
fn live_keys_are_unique() {
    let page = fs::read_to_string(fixture("status_page.html")).unwrap();
    let out = runner::collect(&page, Vec::new(), "tab-title", None).unwrap();
    let mut keys: Vec<_> = out.records.iter().map(|r| (r.area.clone(), r.date)).collect();
    let n = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), n);
}

#[test]
fn history_survives_when_page_has_no_april_data() {
    let dir = tempfile::tempdir().unwrap();
    let hist = dir.path().join("hist.csv");
    fs::write(&hist, "area,cases,date\nIsla Vista,3,2020-04-27\n").unwrap();

    let opts = RunOptions { history_path: hist, ..opts_into(&dir) };
    runner::run(&opts, None).unwrap();

    let text = fs::read_to_string(&opts.out_path).unwrap();
    let rows = sbcovid_scrape::csv::read_records(text.as_bytes(), ExportFormat::Csv).unwrap();
    assert_eq!(rows.last(), Some(&Record::new("Isla Vista", 3, date(4, 27))));
}

#[test]
fn tsv_output() {
    let dir = tempfile::tempdir().unwrap();
    let opts = RunOptions {
        format: ExportFormat::Tsv,
        out_path: dir.path().join("cases.tsv"),
        ..opts_into(&dir)
    };
    runner::run(&opts, None).unwrap();
    let text = fs::read_to_string(&opts.out_path).unwrap();
    assert!(text.starts_with("area\tcases\tdate\nSanta Maria\t1052\t2020-05-04\n"));
}

#[test]
fn missing_inputs_abort_before_writing() {
    let dir = tempfile::tempdir().unwrap();

    let opts = RunOptions { page_path: dir.path().join("nope.html"), ..opts_into(&dir) };
    assert!(matches!(runner::run(&opts, None), Err(ScrapeError::MissingInput { .. })));
    assert!(!opts.out_path.exists());

    let opts = RunOptions { history_path: dir.path().join("nope.csv"), ..opts_into(&dir) };
    assert!(matches!(runner::run(&opts, None), Err(ScrapeError::MissingInput { .. })));
    assert!(!opts.out_path.exists());
}

#[test]
fn unrelated_page_is_a_structural_error() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.html");
    fs::write(&page, "<html><body><div id=\"tab-title-1\"><a>May 1, 2020</a></div><div>No data today.</div></body></html>").unwrap();

    let opts = RunOptions { page_path: page, ..opts_into(&dir) };
    assert!(matches!(runner::run(&opts, None), Err(ScrapeError::NoBlocks)));
}
