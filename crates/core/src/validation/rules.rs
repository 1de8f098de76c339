//! Verdict and violation record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one rule applied to the full collection.
///
/// `Fail` always carries at least one violation; build verdicts through
/// [`Verdict::from_violations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "lowercase")]
pub enum Verdict<T> {
    Pass,
    Fail(Vec<T>),
}

impl<T> Verdict<T> {
    /// `Pass` for an empty list, `Fail` otherwise.
    pub fn from_violations(violations: Vec<T>) -> Self {
        if violations.is_empty() {
            Self::Pass
        } else {
            Self::Fail(violations)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn violations(&self) -> &[T] {
        match self {
            Self::Pass => &[],
            Self::Fail(violations) => violations,
        }
    }

    pub fn into_violations(self) -> Vec<T> {
        match self {
            Self::Pass => Vec::new(),
            Self::Fail(violations) => violations,
        }
    }
}

/// A genre name that also appears in some genre's alt-name list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCollision {
    /// The genre name found among alt-names.
    pub colliding: String,
    /// Name of the genre whose alt-name list contains it.
    pub owner: String,
}

impl fmt::Display for NameCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.colliding, self.owner)
    }
}

/// An alt-name shared by two different genres, seen from `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltNameCollision {
    pub alt: String,
    /// Genre the alt-name was taken from.
    pub source: String,
    /// Genre whose alt-name list also contains it.
    pub target: String,
}

impl fmt::Display for AltNameCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.alt, self.source, self.target)
    }
}
