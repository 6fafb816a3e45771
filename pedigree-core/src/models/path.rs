use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::PedigreeError;

/// Maximum pedigree depth in generations. Generation 1 is a parent's own
/// parents; generation 5 is the deepest recorded ancestor row.
pub const MAX_DEPTH: u8 = 5;

/// Number of addressable slots in one tree: 2 + 4 + 8 + 16 + 32.
pub const SLOT_COUNT: usize = (1 << (MAX_DEPTH + 1)) - 2;

///
/// One branching direction in a pedigree tree
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Branch {
    Sire,
    Dam,
}

impl Branch {
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Sire => "sire",
            Branch::Dam => "dam",
        }
    }

    pub fn from_label(label: &str) -> Option<Branch> {
        match label {
            "sire" => Some(Branch::Sire),
            "dam" => Some(Branch::Dam),
            _ => None,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Branch::Sire => 0,
            Branch::Dam => 1,
        }
    }
}

///
/// TreePath struct, the address of one slot in a pedigree tree
///
/// A path is a sequence of 1 to [MAX_DEPTH] branch directions packed as bits
/// (sire = 0, dam = 1, first segment in the lowest bit). This replaces
/// per-slot named fields: every one of the [SLOT_COUNT] slots maps to exactly
/// one path and one label string such as `sire_dam_sire`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct TreePath {
    bits: u8,
    depth: u8,
}

impl TreePath {
    ///
    /// Build a path from a branch sequence; rejects empty sequences and
    /// sequences deeper than [MAX_DEPTH]
    ///
    pub fn new(branches: &[Branch]) -> Result<TreePath, PedigreeError> {
        if branches.is_empty() {
            return Err(PedigreeError::EmptyPath);
        }
        if branches.len() > MAX_DEPTH as usize {
            let label: Vec<&str> = branches.iter().map(|b| b.label()).collect();
            return Err(PedigreeError::DepthExceeded(label.join("_")));
        }

        let mut bits = 0u8;
        for (i, branch) in branches.iter().enumerate() {
            bits |= branch.bit() << i;
        }

        Ok(TreePath {
            bits,
            depth: branches.len() as u8,
        })
    }

    /// Generation distance of this slot: 1 for a parent's own parents, up to
    /// [MAX_DEPTH] for the deepest row.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        (0..self.depth).map(|i| {
            if self.bits >> i & 1 == 0 {
                Branch::Sire
            } else {
                Branch::Dam
            }
        })
    }

    ///
    /// The underscore-joined label string for this path, e.g. `sire_dam_sire`
    ///
    pub fn label(&self) -> String {
        let labels: Vec<&str> = self.branches().map(|b| b.label()).collect();
        labels.join("_")
    }

    /// Dense index of this slot in 0..[SLOT_COUNT], ordered by generation
    /// then bit pattern. The mapping is total and bijective.
    pub fn slot_index(&self) -> usize {
        // generations 1..d-1 occupy 2^d - 2 slots before this row
        ((1usize << self.depth) - 2) + self.bits as usize
    }

    pub(crate) fn from_slot_index(index: usize) -> TreePath {
        debug_assert!(index < SLOT_COUNT);
        let mut depth = 1u8;
        while ((1usize << (depth + 1)) - 2) <= index {
            depth += 1;
        }
        let bits = (index - ((1usize << depth) - 2)) as u8;
        TreePath { bits, depth }
    }

    ///
    /// Iterate every addressable slot, shallow generations first
    ///
    pub fn all() -> impl Iterator<Item = TreePath> {
        (0..SLOT_COUNT).map(TreePath::from_slot_index)
    }
}

impl FromStr for TreePath {
    type Err = PedigreeError;

    fn from_str(s: &str) -> Result<TreePath, PedigreeError> {
        if s.is_empty() {
            return Err(PedigreeError::EmptyPath);
        }

        let mut branches = Vec::new();
        for segment in s.split('_') {
            match Branch::from_label(segment) {
                Some(branch) => branches.push(branch),
                None => {
                    return Err(PedigreeError::UnknownSegment {
                        path: s.to_string(),
                        segment: segment.to_string(),
                    });
                }
            }
        }

        TreePath::new(&branches)
    }
}

impl Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
