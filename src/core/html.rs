// src/core/html.rs
// Small helpers over the `scraper` tree. Text comes back whitespace-normalized.

use std::sync::LazyLock;

use scraper::{ ElementRef, Selector };

use super::sanitize::normalize_ws;

fn sel(s: &str) -> Selector {
    Selector::parse(s).expect("static selector")
}

pub static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
pub static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
pub static TH: LazyLock<Selector> = LazyLock::new(|| sel("th"));
pub static TD: LazyLock<Selector> = LazyLock::new(|| sel("td"));
pub static CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));
pub static LINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));
pub static WITH_ID: LazyLock<Selector> = LazyLock::new(|| sel("[id]"));

pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// First element sibling after `el`, skipping text and comment nodes.
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Tables in document order; `root` itself counts when it is a `<table>`.
pub fn tables_within(root: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();
    if root.value().name().eq_ignore_ascii_case("table") {
        out.push(root);
    }
    out.extend(root.select(&TABLE));
    out
}

/// Rows that belong to `table` itself, not to a table nested inside it.
pub fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table
        .select(&TR)
        .filter(|tr| {
            tr.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|a| a.value().name().eq_ignore_ascii_case("table"))
                .is_some_and(|t| t.id() == table.id())
        })
        .collect()
}

pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL).map(text_of).collect()
}

pub fn has_th(row: ElementRef<'_>) -> bool {
    row.select(&TH).next().is_some()
}

pub fn has_td(row: ElementRef<'_>) -> bool {
    row.select(&TD).next().is_some()
}
