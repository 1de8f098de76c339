//! `genre-validator` library crate.
//!
//! Sequences the catalog rules, builds a report and renders it. The binary
//! entrypoint lives in `main.rs`.

pub mod checks;
pub mod config;
pub mod report;
