// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge lives here: *where the ground truth sits in the
//! HTML* and *how to pull it out without breaking on the next redesign*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-downloaded page (no networking).
//! - **Tolerant location** of content by text markers rather than a fixed
//!   schema, since the source page is hand-edited and its labels drift.
//! - **Light shaping** into `data::RawTable` / `data::DatedTable`.
//!
//! ## What does **not** live here
//! - Value coercion and row filtering (`normalize`).
//! - Dedup, history merge, file output (`aggregate`, `store`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → file::read_page → specs::status_page::parse_doc
//!                               ↘ Vec<DatedTable> in page order
//!             → normalize → aggregate → file::write_output
//! ```
//!
//! ## Testing notes
//! Parsers are tested offline against small synthetic snippets and the saved
//! fixture under `tests/fixtures/`.
pub mod status_page;
