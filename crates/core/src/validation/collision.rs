//! Cross-genre collision rules.
//!
//! Both rules walk the collection in stored order (outer loop) and re-walk
//! it in stored order for each candidate (inner loop). Output order follows
//! that traversal; nothing is sorted or collapsed.

use super::rules::{AltNameCollision, NameCollision, Verdict};
use crate::genre::GameGenre;

/// Genre names that appear in any genre's alt-name list, itself included.
///
/// Every (name, owner) match is a separate violation, so a name listed as
/// an alt-name by three genres yields three entries.
pub fn validate_name_alt_name_collisions(genres: &[GameGenre]) -> Verdict<NameCollision> {
    let mut collisions = Vec::new();

    for genre in genres {
        for other in genres {
            if other.alt_names.contains(&genre.name) {
                collisions.push(NameCollision {
                    colliding: genre.name.clone(),
                    owner: other.name.clone(),
                });
            }
        }
    }

    Verdict::from_violations(collisions)
}

/// Alt-names shared between two different genres.
///
/// Genres are told apart by name, so entries sharing a name are never
/// compared with each other. Each direction is reported: one string shared
/// by `a` and `b` yields `(x, a, b)` and `(x, b, a)`.
pub fn validate_alt_name_collisions(genres: &[GameGenre]) -> Verdict<AltNameCollision> {
    let mut collisions = Vec::new();

    for genre in genres {
        for alt in &genre.alt_names {
            for other in genres {
                if genre.name == other.name {
                    continue;
                }

                if other.alt_names.contains(alt) {
                    collisions.push(AltNameCollision {
                        alt: alt.clone(),
                        source: genre.name.clone(),
                        target: other.name.clone(),
                    });
                }
            }
        }
    }

    Verdict::from_violations(collisions)
}
