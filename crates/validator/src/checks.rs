//! Named checks wrapping the catalog rules, in reporting precedence.

use serde::Serialize;

use genre_core::genre::GameGenre;
use genre_core::validation::{self, Verdict};

/// Rule families, ordered by the precedence they run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    Emptiness,
    Trimming,
    Case,
    Uniqueness,
    Collisions,
}

/// One catalog rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    NameNotEmpty,
    AltNamesNotEmpty,
    NameTrimmed,
    AltNamesTrimmed,
    NameCase,
    AltNamesCase,
    NameUnique,
    AltNamesUnique,
    NameAltNameCollision,
    AltNameCollision,
}

impl Check {
    /// Every check, in the order they run.
    pub const ALL: [Check; 10] = [
        Check::NameNotEmpty,
        Check::AltNamesNotEmpty,
        Check::NameTrimmed,
        Check::AltNamesTrimmed,
        Check::NameCase,
        Check::AltNamesCase,
        Check::NameUnique,
        Check::AltNamesUnique,
        Check::NameAltNameCollision,
        Check::AltNameCollision,
    ];

    /// Stable identifier matching serde's `rename_all = "snake_case"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::NameNotEmpty => "name_not_empty",
            Self::AltNamesNotEmpty => "alt_names_not_empty",
            Self::NameTrimmed => "name_trimmed",
            Self::AltNamesTrimmed => "alt_names_trimmed",
            Self::NameCase => "name_case",
            Self::AltNamesCase => "alt_names_case",
            Self::NameUnique => "name_unique",
            Self::AltNamesUnique => "alt_names_unique",
            Self::NameAltNameCollision => "name_alt_name_collision",
            Self::AltNameCollision => "alt_name_collision",
        }
    }

    pub fn category(self) -> CheckCategory {
        match self {
            Self::NameNotEmpty | Self::AltNamesNotEmpty => CheckCategory::Emptiness,
            Self::NameTrimmed | Self::AltNamesTrimmed => CheckCategory::Trimming,
            Self::NameCase | Self::AltNamesCase => CheckCategory::Case,
            Self::NameUnique | Self::AltNamesUnique => CheckCategory::Uniqueness,
            Self::NameAltNameCollision | Self::AltNameCollision => CheckCategory::Collisions,
        }
    }

    /// Headline printed above the violation list when the check fails.
    pub fn description(self) -> &'static str {
        match self {
            Self::NameNotEmpty => "There are game genres with empty names",
            Self::AltNamesNotEmpty => "There are game genres with empty alternative names",
            Self::NameTrimmed => {
                "There are game genres with leading or trailing whitespace in their names"
            }
            Self::AltNamesTrimmed => {
                "There are game genres with leading or trailing whitespace in their alternative names"
            }
            Self::NameCase => "There are game genres with names that are not in lowercase",
            Self::AltNamesCase => {
                "There are game genres with alternative names that are not in lowercase"
            }
            Self::NameUnique => "There are game genres with duplicate names",
            Self::AltNamesUnique => "There are game genres with duplicate alternative names",
            Self::NameAltNameCollision => {
                "There are game genres with names that are also alternative names"
            }
            Self::AltNameCollision => {
                "There are game genres with alternative names that are also names"
            }
        }
    }

    /// Evaluate this check against the whole catalog.
    pub fn run(self, genres: &[GameGenre]) -> CheckOutcome {
        let (passed, violations) = match self {
            Self::NameNotEmpty => (validation::validate_name_not_empty(genres), Vec::new()),
            Self::AltNamesNotEmpty => flatten(validation::validate_alt_names_not_empty(genres)),
            Self::NameTrimmed => flatten(validation::validate_name_trimmed(genres)),
            Self::AltNamesTrimmed => flatten(validation::validate_alt_names_trimmed(genres)),
            Self::NameCase => flatten(validation::validate_name_case(genres)),
            Self::AltNamesCase => flatten(validation::validate_alt_names_case(genres)),
            Self::NameUnique => flatten(validation::validate_name_unique(genres)),
            Self::AltNamesUnique => flatten(validation::validate_alt_names_unique(genres)),
            Self::NameAltNameCollision => {
                flatten(validation::validate_name_alt_name_collisions(genres))
            }
            Self::AltNameCollision => flatten(validation::validate_alt_name_collisions(genres)),
        };

        CheckOutcome {
            check: self,
            category: self.category(),
            description: self.description(),
            passed,
            violations,
        }
    }
}

/// Result of running one check, with violations rendered for display.
///
/// `passed` is authoritative: `name_not_empty` fails without listing items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub category: CheckCategory,
    pub description: &'static str,
    pub passed: bool,
    pub violations: Vec<String>,
}

fn flatten<T: ToString>(verdict: Verdict<T>) -> (bool, Vec<String>) {
    let passed = verdict.is_pass();
    let violations = verdict
        .into_violations()
        .iter()
        .map(ToString::to_string)
        .collect();
    (passed, violations)
}
