//! The COI engine: cross-referencing two flattened ancestries into Wright's
//! coefficient of inbreeding.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use pedigree_core::flatten::{flatten, Side};
use pedigree_core::models::{PedigreeTree, MAX_DEPTH};

use crate::matcher::{match_keys, MatchKey};
use crate::trace::{NoTrace, TraceEvent, TraceSink};

/// One (sire path, dam path) pair found to refer to the same animal.
///
/// `contribution` is Wright's term for this pair, `0.5^(n1 + n2 + 1)` with
/// the common ancestor's own inbreeding assumed zero. An exact negative power
/// of two, never rounded before summation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonAncestorMatch {
    pub sire_path: String,
    pub dam_path: String,

    /// Generation on the sire side.
    pub n1: u8,
    /// Generation on the dam side.
    pub n2: u8,

    pub contribution: f64,
}

impl CommonAncestorMatch {
    pub fn contribution_percent(&self) -> f64 {
        self.contribution * 100.0
    }
}

/// All matches sharing one normalized ancestor identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonAncestorSummary {
    /// The sire-side name as first encountered, before normalization.
    pub display_name: String,

    pub matches: Vec<CommonAncestorMatch>,
    pub total_contribution: f64,
}

impl CommonAncestorSummary {
    pub fn total_contribution_percent(&self) -> f64 {
        self.total_contribution * 100.0
    }
}

/// Final output of a COI computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoiResult {
    /// `100 × Σ` of all match contributions across all common ancestors.
    pub coi_percent: f64,

    /// Sorted by total contribution, largest first; ties keep the order in
    /// which the ancestors were first encountered.
    pub common_ancestors: Vec<CommonAncestorSummary>,
}

///
/// Compute Wright's coefficient of inbreeding for a prospective mating
///
/// Flattens both parents' trees, tests every (sire entry, dam entry) pair
/// for identity, and sums `0.5^(n1 + n2 + 1)` over the accepted path pairs.
/// The same animal reached via several distinct path pairs contributes once
/// per pair; that is Wright's path accounting, not double counting.
///
/// Total over its input domain: missing or sparse pedigree data yields fewer
/// matches and a lower (possibly zero) coefficient, never an error.
///
pub fn compute_coi(sire_tree: &PedigreeTree, dam_tree: &PedigreeTree) -> CoiResult {
    compute_coi_traced(sire_tree, dam_tree, &mut NoTrace)
}

///
/// [compute_coi] with every per-pair decision reported to `trace`
///
pub fn compute_coi_traced(
    sire_tree: &PedigreeTree,
    dam_tree: &PedigreeTree,
    trace: &mut dyn TraceSink,
) -> CoiResult {
    let sire_entries = flatten(sire_tree, Side::Sire);
    let dam_entries = flatten(dam_tree, Side::Dam);

    // normalize once per entry, not once per pair
    let sire_keys: Vec<MatchKey> = sire_entries
        .iter()
        .map(|e| MatchKey::new(&e.name, e.registration.as_deref()))
        .collect();
    let dam_keys: Vec<MatchKey> = dam_entries
        .iter()
        .map(|e| MatchKey::new(&e.name, e.registration.as_deref()))
        .collect();

    // guard against reprocessing an identical (sire path, dam path) key;
    // paths are unique per side so this cannot fire from well-formed input
    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

    let mut groups: HashMap<String, CommonAncestorSummary> = HashMap::new();
    let mut group_order: Vec<String> = Vec::new();
    let mut total = 0.0f64;

    for (s, s_key) in sire_entries.iter().zip(&sire_keys) {
        for (d, d_key) in dam_entries.iter().zip(&dam_keys) {
            let matched_by = match_keys(s_key, d_key);
            trace.record(TraceEvent::Compared {
                sire_path: s.path.clone(),
                dam_path: d.path.clone(),
                matched_by,
            });

            if matched_by.is_none() {
                continue;
            }

            debug_assert!((1..=MAX_DEPTH).contains(&s.generation));
            debug_assert!((1..=MAX_DEPTH).contains(&d.generation));

            if !seen_pairs.insert((s.path.clone(), d.path.clone())) {
                trace.record(TraceEvent::DuplicatePairSkipped {
                    sire_path: s.path.clone(),
                    dam_path: d.path.clone(),
                });
                continue;
            }

            let exponent = i32::from(s.generation) + i32::from(d.generation) + 1;
            let contribution = 0.5f64.powi(exponent);
            total += contribution;

            trace.record(TraceEvent::MatchRecorded {
                sire_path: s.path.clone(),
                dam_path: d.path.clone(),
                n1: s.generation,
                n2: d.generation,
                contribution,
            });

            let key = s_key.normalized_name().to_string();
            let summary = groups.entry(key.clone()).or_insert_with(|| {
                group_order.push(key);
                CommonAncestorSummary {
                    display_name: s.name.clone(),
                    matches: Vec::new(),
                    total_contribution: 0.0,
                }
            });
            summary.matches.push(CommonAncestorMatch {
                sire_path: s.path.clone(),
                dam_path: d.path.clone(),
                n1: s.generation,
                n2: d.generation,
                contribution,
            });
            summary.total_contribution += contribution;
        }
    }

    let mut common_ancestors: Vec<CommonAncestorSummary> = group_order
        .iter()
        .map(|key| groups.remove(key).unwrap())
        .collect();

    // stable sort: equal totals keep first-encountered order
    common_ancestors.sort_by(|a, b| b.total_contribution.total_cmp(&a.total_contribution));

    CoiResult {
        coi_percent: total * 100.0,
        common_ancestors,
    }
}
