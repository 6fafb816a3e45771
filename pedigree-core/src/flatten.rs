//! Flattening a pedigree tree into per-slot ancestor records.
//!
//! The COI computation cross-references the sire-side and dam-side ancestries
//! as flat lists. Flattening is mechanical but must be exact: every populated
//! slot appears exactly once, tagged with its generation and a globally unique
//! side-prefixed path.

use crate::models::PedigreeTree;

///
/// Which mated parent a flattened list belongs to
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Side {
    Sire,
    Dam,
}

impl Side {
    /// Prefix prepended to slot labels so paths are unique across both sides.
    pub fn prefix(&self) -> &'static str {
        match self {
            Side::Sire => "sire",
            Side::Dam => "dam",
        }
    }
}

/// One flattened occurrence of an ancestor within one side's tree.
///
/// The same animal may legitimately appear at several paths (reached via
/// different lineage branches); those are distinct occurrences, not
/// duplicates, and each carries its own generation and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorEntry {
    pub name: String,
    pub registration: Option<String>,

    /// Distance in parent-generations from the prospective offspring: the
    /// mated parent's own parents are generation 1.
    pub generation: u8,

    /// Side prefix joined with the slot labels, e.g. `sire_dam_sire`.
    /// Unique within one side's flattened list.
    pub path: String,
}

///
/// Flatten one parent's pedigree tree into ancestor records
///
/// Emits one [AncestorEntry] per recorded slot; absent and unnamed slots are
/// silently skipped. Output ordering is shallow-generations-first but callers
/// must not rely on it.
///
pub fn flatten(tree: &PedigreeTree, side: Side) -> Vec<AncestorEntry> {
    tree.iter_recorded()
        .map(|(path, ancestor)| AncestorEntry {
            name: ancestor.name.clone(),
            registration: ancestor.registration.clone(),
            generation: path.depth(),
            path: format!("{}_{}", side.prefix(), path.label()),
        })
        .collect()
}
