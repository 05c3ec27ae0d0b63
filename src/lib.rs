// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod aggregate;
pub mod csv;
pub mod data;
pub mod file;
pub mod normalize;
pub mod progress;
pub mod runner;
pub mod store;

pub use data::Record;
pub use error::ScrapeError;
