//! Pedigree tree model and ancestor flattening.
//!
//! This crate provides the data model shared by the pedcoi tools:
//!
//! - A fixed-depth binary pedigree tree (sire/dam branching, up to 5
//!   generations, 62 addressable slots)
//! - Bit-path slot addressing with round-trip label strings (`sire_dam_sire`)
//! - Flattening a tree into per-slot ancestor records for cross-referencing
//!
//! # Example
//!
//! ```
//! use pedigree_core::models::{AncestorRef, PedigreeTree, TreePath};
//! use pedigree_core::flatten::{flatten, Side};
//!
//! let mut tree = PedigreeTree::new();
//! tree.set("sire".parse::<TreePath>().unwrap(), AncestorRef::new("Mons"));
//!
//! let entries = flatten(&tree, Side::Sire);
//! assert_eq!(entries[0].path, "sire_sire");
//! assert_eq!(entries[0].generation, 1);
//! ```

pub mod errors;
pub mod flatten;
pub mod models;

// re-exports
pub use self::errors::PedigreeError;
pub use self::flatten::{flatten, AncestorEntry, Side};
pub use self::models::{AncestorRef, Branch, PedigreeTree, TreePath};
