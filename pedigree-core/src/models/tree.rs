use std::collections::BTreeMap;

use crate::errors::PedigreeError;
use crate::models::ancestor::AncestorRef;
use crate::models::path::{TreePath, SLOT_COUNT};

///
/// PedigreeTree struct, the known ancestry of one parent (sire or dam)
///
/// A fixed hierarchy of 62 slots addressed by [TreePath]: 2 parents, 4
/// grandparents, and so on down to 32 slots at generation 5. The mated parent
/// itself is not a slot; only its ancestors are. Trees are constructed once,
/// from transcribed documents or manual entry, and read-only for the duration
/// of a computation.
///
/// The exchange shape is a flat map of path label to [AncestorRef]:
///
/// ```json
/// { "sire": { "name": "Mons" }, "sire_dam": { "name": "Pusur" } }
/// ```
///
/// Malformed labels and paths deeper than 5 generations are rejected here, at
/// the construction boundary; consumers may assume a well-formed tree.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<String, AncestorRef>",
        into = "BTreeMap<String, AncestorRef>"
    )
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedigreeTree {
    slots: Vec<Option<AncestorRef>>,
}

impl PedigreeTree {
    pub fn new() -> Self {
        PedigreeTree {
            slots: vec![None; SLOT_COUNT],
        }
    }

    pub fn set(&mut self, path: TreePath, ancestor: AncestorRef) {
        self.slots[path.slot_index()] = Some(ancestor);
    }

    pub fn get(&self, path: TreePath) -> Option<&AncestorRef> {
        self.slots[path.slot_index()].as_ref()
    }

    ///
    /// Build a tree from (path label, ancestor) pairs, validating every label
    ///
    pub fn from_entries<I, S>(entries: I) -> Result<PedigreeTree, PedigreeError>
    where
        I: IntoIterator<Item = (S, AncestorRef)>,
        S: AsRef<str>,
    {
        let mut tree = PedigreeTree::new();
        for (label, ancestor) in entries {
            let path: TreePath = label.as_ref().parse()?;
            tree.set(path, ancestor);
        }
        Ok(tree)
    }

    ///
    /// Iterate the slots that actually record an animal, shallow first
    ///
    /// Slots that are absent or hold an empty name are skipped.
    ///
    pub fn iter_recorded(&self) -> impl Iterator<Item = (TreePath, &AncestorRef)> {
        TreePath::all().filter_map(|path| {
            self.slots[path.slot_index()]
                .as_ref()
                .filter(|a| a.is_recorded())
                .map(|a| (path, a))
        })
    }

    pub fn recorded_count(&self) -> usize {
        self.iter_recorded().count()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded_count() == 0
    }
}

impl Default for PedigreeTree {
    fn default() -> Self {
        PedigreeTree::new()
    }
}

impl TryFrom<BTreeMap<String, AncestorRef>> for PedigreeTree {
    type Error = PedigreeError;

    fn try_from(map: BTreeMap<String, AncestorRef>) -> Result<PedigreeTree, PedigreeError> {
        PedigreeTree::from_entries(map)
    }
}

impl From<PedigreeTree> for BTreeMap<String, AncestorRef> {
    fn from(tree: PedigreeTree) -> BTreeMap<String, AncestorRef> {
        tree.iter_recorded()
            .map(|(path, ancestor)| (path.label(), ancestor.clone()))
            .collect()
    }
}
