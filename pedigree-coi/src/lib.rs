//! Wright's coefficient of inbreeding (COI) over 5-generation pedigree trees.
//!
//! Given the prospective sire's and dam's ancestries, this crate finds every
//! ancestor appearing on both sides, accounts for every distinct path pair by
//! which it is reached, and combines these into Wright's coefficient:
//!
//! `COI = Σ 0.5^(n1 + n2 + 1)` over all common-ancestor path pairs, where
//! `n1`/`n2` are the generation distances on the sire/dam side.
//!
//! The common ancestor's own inbreeding (the `FA` term of the full formula)
//! is assumed to be zero: a 5-generation pedigree cannot supply each common
//! ancestor's own ancestry, so the term is not computable from this input.
//!
//! # Example
//!
//! ```
//! use pedigree_core::models::{AncestorRef, PedigreeTree};
//! use pedigree_coi::{compute_coi, RiskLevel};
//!
//! // both parents share the same sire: half siblings
//! let shared = AncestorRef::new("Mons");
//! let mut sire = PedigreeTree::new();
//! sire.set("sire".parse().unwrap(), shared.clone());
//! let mut dam = PedigreeTree::new();
//! dam.set("sire".parse().unwrap(), shared);
//!
//! let result = compute_coi(&sire, &dam);
//! assert_eq!(result.coi_percent, 12.5);
//! assert_eq!(RiskLevel::classify(result.coi_percent), RiskLevel::High);
//! ```

pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod risk;
pub mod trace;

// re-exports
pub use self::engine::{
    compute_coi, compute_coi_traced, CoiResult, CommonAncestorMatch, CommonAncestorSummary,
};
pub use self::matcher::{is_same_individual, MatchedBy};
pub use self::risk::RiskLevel;
pub use self::trace::{NoTrace, TraceEvent, TraceSink};
