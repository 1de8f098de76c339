//! Catalog rule engine.
//!
//! Every rule is a pure function over the whole genre collection and
//! returns every violation it finds. Rules are independent of each other;
//! ordering and stop-on-failure policy belong to the caller.

pub mod collision;
pub mod evaluator;
pub mod rules;

pub use collision::{validate_alt_name_collisions, validate_name_alt_name_collisions};
pub use evaluator::{
    is_lowercase, validate_alt_names_case, validate_alt_names_not_empty,
    validate_alt_names_trimmed, validate_alt_names_unique, validate_name_case,
    validate_name_not_empty, validate_name_trimmed, validate_name_unique,
};
pub use rules::{AltNameCollision, NameCollision, Verdict};
