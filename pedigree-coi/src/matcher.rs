//! Deciding whether two ancestor records denote the same animal.
//!
//! The matcher is an ordered chain of three strategies, tried until one
//! decides: registration-number equality, exact normalized-name equality,
//! and normalized-name containment for long names. It is a heuristic, not an
//! identity oracle: long similar names can over-match, and abbreviated or
//! short titled variants can under-match. The thresholds below are part of
//! the product's observed behavior and must not be tuned casually.

use serde::Serialize;

use pedigree_core::models::AncestorRef;

use crate::normalize::{clean_registration, normalize_name};

/// Cleaned registrations shorter than this are not trusted for an exact
/// match; degenerate strings like `12` would otherwise match everything.
pub const MIN_REGISTRATION_LEN: usize = 4;

/// Containment matching only applies when both normalized names are longer
/// than this, so short names never substring-match.
pub const MIN_CONTAINMENT_LEN: usize = 8;

///
/// Which strategy decided that two records match
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedBy {
    /// Cleaned registration numbers are equal and long enough to trust.
    Registration,
    /// Normalized names are exactly equal.
    ExactName,
    /// One long normalized name contains the other (titled vs. untitled
    /// variants of the same name).
    NameContainment,
}

/// Precomputed comparison forms for one ancestor record.
///
/// The engine tests every sire entry against every dam entry; building the
/// normalized name and cleaned registration once per entry keeps the
/// all-pairs loop on borrowed strings.
#[derive(Debug, Clone)]
pub struct MatchKey {
    recorded: bool,
    name: String,
    name_chars: usize,
    registration: Option<String>,
}

impl MatchKey {
    pub fn new(name: &str, registration: Option<&str>) -> MatchKey {
        let normalized = normalize_name(name);
        MatchKey {
            recorded: !name.trim().is_empty(),
            name_chars: normalized.chars().count(),
            name: normalized,
            registration: registration.map(clean_registration),
        }
    }

    /// The normalized name; the grouping identity for result summaries.
    pub fn normalized_name(&self) -> &str {
        &self.name
    }
}

impl From<&AncestorRef> for MatchKey {
    fn from(ancestor: &AncestorRef) -> MatchKey {
        MatchKey::new(&ancestor.name, ancestor.registration.as_deref())
    }
}

/// Registration fast path: trusted when both cleaned registrations are equal
/// and at least [MIN_REGISTRATION_LEN] characters. Overrides any name-based
/// negative. Unequal registrations do not decide anything; transcription
/// noise makes them unreliable as a mismatch signal.
fn match_by_registration(a: &MatchKey, b: &MatchKey) -> Option<MatchedBy> {
    let reg_a = a.registration.as_deref()?;
    let reg_b = b.registration.as_deref()?;

    if reg_a.len() >= MIN_REGISTRATION_LEN && reg_a == reg_b {
        Some(MatchedBy::Registration)
    } else {
        None
    }
}

fn match_by_exact_name(a: &MatchKey, b: &MatchKey) -> Option<MatchedBy> {
    if a.name == b.name {
        Some(MatchedBy::ExactName)
    } else {
        None
    }
}

/// Containment fallback for titled name variants, e.g. `GIC Somecat's Name`
/// against `Somecat's Name`. Both sides must exceed [MIN_CONTAINMENT_LEN]
/// characters.
fn match_by_containment(a: &MatchKey, b: &MatchKey) -> Option<MatchedBy> {
    if a.name_chars > MIN_CONTAINMENT_LEN
        && b.name_chars > MIN_CONTAINMENT_LEN
        && (a.name.contains(&b.name) || b.name.contains(&a.name))
    {
        Some(MatchedBy::NameContainment)
    } else {
        None
    }
}

///
/// Run the strategy chain over precomputed keys
///
/// Records with an empty name on either side never match: an unrecorded slot
/// denotes an unknown animal, not a particular one.
///
pub fn match_keys(a: &MatchKey, b: &MatchKey) -> Option<MatchedBy> {
    if !a.recorded || !b.recorded {
        return None;
    }

    match_by_registration(a, b)
        .or_else(|| match_by_exact_name(a, b))
        .or_else(|| match_by_containment(a, b))
}

///
/// Run the strategy chain; returns which strategy matched, if any
///
pub fn match_ancestors(a: &AncestorRef, b: &AncestorRef) -> Option<MatchedBy> {
    match_keys(&MatchKey::from(a), &MatchKey::from(b))
}

///
/// Whether two ancestor records denote the same animal
///
pub fn is_same_individual(a: &AncestorRef, b: &AncestorRef) -> bool {
    match_ancestors(a, b).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_empty_name_never_matches() {
        let unknown = AncestorRef::new("");
        let known = AncestorRef::new("Mons");
        assert_eq!(match_ancestors(&unknown, &known), None);
        assert_eq!(match_ancestors(&known, &unknown), None);
        assert_eq!(match_ancestors(&unknown, &unknown), None);
    }

    #[rstest]
    fn test_registration_overrides_name_mismatch() {
        let a = AncestorRef::with_registration("Mons", "(N) LO 212345");
        let b = AncestorRef::with_registration("GIC Solberg's Mons", "n lo 212345");
        assert_eq!(match_ancestors(&a, &b), Some(MatchedBy::Registration));
    }

    #[rstest]
    fn test_short_registration_is_not_trusted() {
        // cleaned to "12", below the 4-character floor: fall through to names
        let a = AncestorRef::with_registration("Mons", "1-2");
        let b = AncestorRef::with_registration("Frida", "12");
        assert_eq!(match_ancestors(&a, &b), None);

        // but equal names still match even with a degenerate registration
        let c = AncestorRef::with_registration("Mons", "12");
        assert_eq!(match_ancestors(&a, &c), Some(MatchedBy::ExactName));
    }

    #[rstest]
    fn test_registration_only_on_one_side_falls_through() {
        let a = AncestorRef::with_registration("Mons", "(N) LO 212345");
        let b = AncestorRef::new("MONS");
        assert_eq!(match_ancestors(&a, &b), Some(MatchedBy::ExactName));
    }

    #[rstest]
    #[case("Mons", "mons")]
    #[case("Solberg`s Mons", "Solberg's Mons")]
    #[case("Amor@Katzenhof", "Amor*Katzenhof")]
    fn test_exact_match_after_normalization(#[case] a: &str, #[case] b: &str) {
        assert_eq!(
            match_ancestors(&AncestorRef::new(a), &AncestorRef::new(b)),
            Some(MatchedBy::ExactName)
        );
    }

    #[rstest]
    fn test_titled_variant_matches_by_containment() {
        let titled = AncestorRef::new("GIC Somecat's Name");
        let untitled = AncestorRef::new("Somecat's Name");
        assert_eq!(
            match_ancestors(&titled, &untitled),
            Some(MatchedBy::NameContainment)
        );
    }

    #[rstest]
    #[case("Mons", "Mons II")]
    #[case("Solberg's Mons", "Mons")]
    fn test_short_names_never_containment_match(#[case] a: &str, #[case] b: &str) {
        // containment needs both normalized names to exceed 8 characters
        assert_eq!(
            match_ancestors(&AncestorRef::new(a), &AncestorRef::new(b)),
            None
        );
    }

    #[rstest]
    fn test_unrelated_names_do_not_match() {
        let a = AncestorRef::new("Bjørnebo Måne");
        let b = AncestorRef::new("Kätzchen von Berg");
        assert_eq!(match_ancestors(&a, &b), None);
    }

    #[rstest]
    fn test_is_same_individual_follows_the_chain() {
        // registration positive despite differing names
        let a = AncestorRef::with_registration("Mons", "(N) LO 212345");
        let b = AncestorRef::with_registration("Felix av Berg", "N LO 212345");
        assert!(is_same_individual(&a, &b));

        assert!(is_same_individual(
            &AncestorRef::new("Mons"),
            &AncestorRef::new("MONS")
        ));
        assert!(!is_same_individual(
            &AncestorRef::new("Mons"),
            &AncestorRef::new("Frida")
        ));
    }

    #[rstest]
    fn test_precomputed_keys_agree_with_direct_matching() {
        let a = AncestorRef::new("GIC Somecat's Name");
        let b = AncestorRef::with_registration("Somecat's Name", "FIFe LO 9876");

        let key_a = MatchKey::from(&a);
        let key_b = MatchKey::from(&b);
        assert_eq!(match_keys(&key_a, &key_b), match_ancestors(&a, &b));
        assert_eq!(key_a.normalized_name(), "gic somecat's name");
    }
}
