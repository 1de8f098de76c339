//! Per-field rules: emptiness, trimming, case and uniqueness.

use std::collections::{BTreeMap, HashSet};

use super::rules::Verdict;
use crate::genre::GameGenre;

/// `true` when no genre name is empty or whitespace-only.
pub fn validate_name_not_empty(genres: &[GameGenre]) -> bool {
    genres.iter().all(|genre| !genre.name.trim().is_empty())
}

/// Genres owning at least one empty or whitespace-only alt-name.
///
/// Each owner is reported once, in collection order.
pub fn validate_alt_names_not_empty(genres: &[GameGenre]) -> Verdict<String> {
    owners_where(genres, |alt| alt.trim().is_empty())
}

/// Genre names with leading or trailing whitespace, reported verbatim.
pub fn validate_name_trimmed(genres: &[GameGenre]) -> Verdict<String> {
    names_where(genres, |name| name != name.trim())
}

/// Genres owning at least one alt-name with surrounding whitespace.
pub fn validate_alt_names_trimmed(genres: &[GameGenre]) -> Verdict<String> {
    owners_where(genres, |alt| alt != alt.trim())
}

/// Genre names containing an uppercase (or otherwise non-lowercase) letter.
pub fn validate_name_case(genres: &[GameGenre]) -> Verdict<String> {
    names_where(genres, |name| !is_lowercase(name))
}

/// Alt-names that are not lowercase.
///
/// Reports the alt-names themselves, not their owners; a repeated offending
/// string is reported each time it occurs.
pub fn validate_alt_names_case(genres: &[GameGenre]) -> Verdict<String> {
    let invalid = genres
        .iter()
        .flat_map(|genre| &genre.alt_names)
        .filter(|alt| !is_lowercase(alt))
        .cloned()
        .collect();

    Verdict::from_violations(invalid)
}

/// Genre names used by more than one genre.
///
/// Each duplicated name is reported once, sorted lexicographically.
/// Comparison is exact and case-sensitive.
pub fn validate_name_unique(genres: &[GameGenre]) -> Verdict<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for genre in genres {
        *counts.entry(genre.name.as_str()).or_default() += 1;
    }

    let duplicates = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect();

    Verdict::from_violations(duplicates)
}

/// Genres whose own alt-name list repeats a value.
///
/// Only the owner is reported; scanning a genre stops at its first repeat.
pub fn validate_alt_names_unique(genres: &[GameGenre]) -> Verdict<String> {
    names_where_genre(genres, |genre| {
        let mut seen = HashSet::with_capacity(genre.alt_names.len());
        genre.alt_names.iter().any(|alt| !seen.insert(alt.as_str()))
    })
}

/// Whether every code point in `s` lowercases to itself.
///
/// Digits, punctuation and uncased scripts pass trivially.
pub fn is_lowercase(s: &str) -> bool {
    s.chars().all(|c| c.to_lowercase().eq(std::iter::once(c)))
}

fn names_where(genres: &[GameGenre], invalid: impl Fn(&str) -> bool) -> Verdict<String> {
    names_where_genre(genres, |genre| invalid(genre.name.as_str()))
}

fn names_where_genre(
    genres: &[GameGenre],
    invalid: impl Fn(&GameGenre) -> bool,
) -> Verdict<String> {
    let names = genres
        .iter()
        .filter(|genre| invalid(*genre))
        .map(|genre| genre.name.clone())
        .collect();

    Verdict::from_violations(names)
}

fn owners_where(genres: &[GameGenre], invalid_alt: impl Fn(&str) -> bool) -> Verdict<String> {
    let mut owners: Vec<String> = Vec::new();

    for genre in genres {
        let offends = genre.alt_names.iter().any(|alt| invalid_alt(alt.as_str()));
        // Two genres may share a name; the owner still appears once.
        if offends && !owners.contains(&genre.name) {
            owners.push(genre.name.clone());
        }
    }

    Verdict::from_violations(owners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(name: &str, alt_names: &[&str]) -> GameGenre {
        GameGenre::new(name, alt_names.iter().copied())
    }

    // -- emptiness --

    #[test]
    fn name_not_empty_passes_with_names() {
        let genres = [genre("action", &[]), genre("rpg", &[])];
        assert!(validate_name_not_empty(&genres));
    }

    #[test]
    fn name_not_empty_fails_on_empty_name() {
        let genres = [genre("action", &[]), genre("", &[])];
        assert!(!validate_name_not_empty(&genres));
    }

    #[test]
    fn name_not_empty_fails_on_whitespace_name() {
        assert!(!validate_name_not_empty(&[genre("   ", &[])]));
    }

    #[test]
    fn name_not_empty_accepts_non_latin_names() {
        assert!(validate_name_not_empty(&[genre("アクション", &[])]));
    }

    #[test]
    fn alt_names_not_empty_reports_owner_once() {
        let genres = [genre("action", &["", "act", "  "]), genre("rpg", &["role"])];
        let verdict = validate_alt_names_not_empty(&genres);
        assert_eq!(verdict.violations(), ["action"]);
    }

    #[test]
    fn alt_names_not_empty_reports_each_owner_in_order() {
        let genres = [genre("action", &["act", ""]), genre("adventure", &["adv", "  "])];
        let verdict = validate_alt_names_not_empty(&genres);
        assert_eq!(verdict.violations(), ["action", "adventure"]);
    }

    #[test]
    fn alt_names_not_empty_accepts_genre_without_alt_names() {
        assert!(validate_alt_names_not_empty(&[genre("action", &[])]).is_pass());
    }

    // -- trimming --

    #[test]
    fn name_trimmed_reports_untrimmed_names_verbatim() {
        let genres = [genre(" action", &[]), genre("rpg", &[]), genre("adventure ", &[])];
        let verdict = validate_name_trimmed(&genres);
        assert_eq!(verdict.violations(), [" action", "adventure "]);
    }

    #[test]
    fn name_trimmed_ignores_inner_whitespace() {
        assert!(validate_name_trimmed(&[genre("real time strategy", &[])]).is_pass());
    }

    #[test]
    fn alt_names_trimmed_reports_owner_once() {
        let genres = [
            genre("action", &["act", " fighting", "brawler "]),
            genre("adventure", &["adv"]),
        ];
        let verdict = validate_alt_names_trimmed(&genres);
        assert_eq!(verdict.violations(), ["action"]);
    }

    #[test]
    fn alt_names_trimmed_flags_tabs_and_newlines() {
        let genres = [genre("puzzle", &["logic\t"]), genre("rpg", &["\nrole"])];
        let verdict = validate_alt_names_trimmed(&genres);
        assert_eq!(verdict.violations(), ["puzzle", "rpg"]);
    }

    // -- case --

    #[test]
    fn name_case_reports_capitalised_name() {
        let verdict = validate_name_case(&[genre("Action", &[])]);
        assert_eq!(verdict.violations(), ["Action"]);
    }

    #[test]
    fn name_case_accepts_digits_and_symbols() {
        let genres = [genre("4x", &[]), genre("shoot 'em up", &[]), genre("2.5d-platformer", &[])];
        assert!(validate_name_case(&genres).is_pass());
    }

    #[test]
    fn name_case_accepts_uncased_scripts() {
        assert!(validate_name_case(&[genre("アクション", &[])]).is_pass());
    }

    #[test]
    fn name_case_rejects_non_ascii_uppercase() {
        let verdict = validate_name_case(&[genre("ÉPICO", &[]), genre("épico", &[])]);
        assert_eq!(verdict.violations(), ["ÉPICO"]);
    }

    #[test]
    fn alt_names_case_reports_alt_names_not_owners() {
        let genres = [genre("action", &["Act", "fighting"]), genre("adventure", &["Adv", "RPG"])];
        let verdict = validate_alt_names_case(&genres);
        assert_eq!(verdict.violations(), ["Act", "Adv", "RPG"]);
    }

    #[test]
    fn alt_names_case_keeps_repeated_offenders() {
        let genres = [genre("action", &["RPG"]), genre("adventure", &["RPG"])];
        let verdict = validate_alt_names_case(&genres);
        assert_eq!(verdict.violations(), ["RPG", "RPG"]);
    }

    #[test]
    fn lowercase_check_is_stable_on_lowercased_input() {
        for s in ["Action", "ÉPICO", "Shoot 'Em Up", "İstanbul", "ΟΔΟΣ"] {
            let lowered = s.to_lowercase();
            assert!(!is_lowercase(s), "{s} should not be lowercase");
            assert!(is_lowercase(&lowered), "{lowered} should be lowercase");
        }
    }

    // -- uniqueness --

    #[test]
    fn name_unique_reports_each_duplicate_once() {
        let genres = [
            genre("action", &[]),
            genre("action", &[]),
            genre("action", &[]),
            genre("rpg", &[]),
        ];
        assert_eq!(validate_name_unique(&genres).violations(), ["action"]);
    }

    #[test]
    fn name_unique_sorts_duplicates() {
        let genres = [
            genre("rpg", &[]),
            genre("action", &[]),
            genre("rpg", &[]),
            genre("action", &[]),
        ];
        assert_eq!(validate_name_unique(&genres).violations(), ["action", "rpg"]);
    }

    #[test]
    fn name_unique_is_case_sensitive() {
        let genres = [genre("action", &[]), genre("Action", &[])];
        assert!(validate_name_unique(&genres).is_pass());
    }

    #[test]
    fn alt_names_unique_reports_owner_once() {
        let genres = [
            genre("action", &["act", "fighting", "act", "fighting"]),
            genre("adventure", &["adv", "quest"]),
        ];
        assert_eq!(validate_alt_names_unique(&genres).violations(), ["action"]);
    }

    #[test]
    fn alt_names_unique_ignores_repeats_across_genres() {
        let genres = [genre("action", &["x"]), genre("adventure", &["x"])];
        assert!(validate_alt_names_unique(&genres).is_pass());
    }

    #[test]
    fn alt_names_unique_treats_whitespace_entries_as_values() {
        let distinct = [genre("action", &[" ", "  "])];
        assert!(validate_alt_names_unique(&distinct).is_pass());

        let repeated = [genre("action", &[" ", " "])];
        assert_eq!(validate_alt_names_unique(&repeated).violations(), ["action"]);
    }

    // -- empty collection --

    #[test]
    fn empty_collection_passes_every_rule() {
        let genres: [GameGenre; 0] = [];
        assert!(validate_name_not_empty(&genres));
        assert!(validate_alt_names_not_empty(&genres).is_pass());
        assert!(validate_name_trimmed(&genres).is_pass());
        assert!(validate_alt_names_trimmed(&genres).is_pass());
        assert!(validate_name_case(&genres).is_pass());
        assert!(validate_alt_names_case(&genres).is_pass());
        assert!(validate_name_unique(&genres).is_pass());
        assert!(validate_alt_names_unique(&genres).is_pass());
    }
}
