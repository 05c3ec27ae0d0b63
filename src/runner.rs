// src/runner.rs
use std::path::PathBuf;

use crate::{
    aggregate::{ dedup_first, merge_history },
    config::options::RunOptions,
    data::Record,
    error::ScrapeError,
    file::{ read_page, write_output },
    normalize::normalize_table,
    progress::Progress,
    specs::status_page,
    store::load_history,
};

/// Everything the pipeline produced, before it touches the output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collected {
    pub records: Vec<Record>,
    pub blocks: usize,
    pub live_rows: usize,
    pub duplicates_dropped: usize,
    pub history_rows: usize,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub blocks: usize,
    pub live_rows: usize,
    pub duplicates_dropped: usize,
    pub history_rows: usize,
    pub total_rows: usize,
    pub out_path: PathBuf,
}

/// Top-level runner: read page and history, transform, write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let page = read_page(&opts.page_path)?;
    let history = load_history(&opts.history_path)?;

    let collected = collect(&page, history, &opts.title_id_prefix, progress)?;

    write_output(&opts.out_path, &collected.records, opts.format)?;
    logf!("Wrote {} rows to {}", collected.records.len(), opts.out_path.display());

    Ok(RunSummary {
        blocks: collected.blocks,
        live_rows: collected.live_rows,
        duplicates_dropped: collected.duplicates_dropped,
        history_rows: collected.history_rows,
        total_rows: collected.records.len(),
        out_path: opts.out_path.clone(),
    })
}

/// The in-memory pipeline over an already-loaded page (nbsp already stripped)
/// and history. Live records keep page order; history follows unchanged.
pub fn collect(
    page_html: &str,
    history: Vec<Record>,
    id_prefix: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected, ScrapeError> {
    let tables = status_page::parse_doc(page_html, id_prefix)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(tables.len());
    }

    let mut live: Vec<Record> = Vec::new();
    for dated in &tables {
        let records = normalize_table(&dated.table, dated.date.date)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&dated.date.raw, records.len());
        }
        live.extend(records);
    }

    let live_rows = live.len();
    let (live, duplicates_dropped) = dedup_first(live);
    if duplicates_dropped > 0 {
        logf!("Collapsed {duplicates_dropped} duplicate (area, date) rows; kept first in page order");
    }

    let history_rows = history.len();
    logf!("Appending {history_rows} historical rows");
    let records = merge_history(live, history);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(Collected {
        records,
        blocks: tables.len(),
        live_rows,
        duplicates_dropped,
        history_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::TITLE_ID_PREFIX;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        total: usize,
        items: Vec<(String, usize)>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn item_done(&mut self, label: &str, rows: usize) { self.items.push((label.to_string(), rows)); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn block(n: u32, date: &str, rows: &str) -> String {
        format!(
            r#"<div id="tab-title-{n}"><a>{date}</a></div>
               <div><table><tr><th>Geographic Area</th><th>Confirmed Cases</th></tr>{rows}</table></div>"#
        )
    }

    #[test]
    fn duplicate_dates_keep_first_listing() {
        let page = format!(
            "{}{}",
            block(1, "May 1, 2020", "<tr><td>Goleta</td><td>12</td></tr>"),
            block(2, "May 1, 2020", "<tr><td>Goleta</td><td>15</td></tr>"),
        );
        let mut rec = Recorder::default();
        let out = collect(&page, Vec::new(), TITLE_ID_PREFIX, Some(&mut rec)).unwrap();

        let may1 = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        assert_eq!(out.records, vec![Record::new("Goleta", 12, may1)]);
        assert_eq!((out.blocks, out.live_rows, out.duplicates_dropped), (2, 2, 1));

        assert_eq!(rec.total, 2);
        assert_eq!(rec.items, vec![("May 1, 2020".to_string(), 1), ("May 1, 2020".to_string(), 1)]);
        assert!(rec.finished);
    }

    #[test]
    fn history_rides_along_after_live_rows() {
        let page = block(1, "May 1, 2020", "<tr><td>Goleta</td><td>12</td></tr><tr><td>Total</td><td>12</td></tr>");
        let iv = Record::new("Isla Vista", 3, NaiveDate::from_ymd_opt(2020, 4, 27).unwrap());
        let out = collect(&page, vec![iv.clone()], TITLE_ID_PREFIX, None).unwrap();
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[1], iv);
        assert_eq!(out.history_rows, 1);
    }

    #[test]
    fn bad_count_in_any_block_aborts_the_run() {
        let page = format!(
            "{}{}",
            block(1, "May 2, 2020", "<tr><td>Goleta</td><td>12</td></tr>"),
            block(2, "May 1, 2020", "<tr><td>Goleta</td><td>lots</td></tr>"),
        );
        assert!(matches!(
            collect(&page, Vec::new(), TITLE_ID_PREFIX, None),
            Err(ScrapeError::InvalidCount { .. })
        ));
    }
}
