//! `genre-core` library crate.
//!
//! Game genre data model and the lexical / cross-reference rule engine.
//! Pure logic: nothing here reads files or logs.

pub mod genre;
pub mod validation;
