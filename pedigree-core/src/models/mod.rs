pub mod ancestor;
pub mod path;
pub mod tree;

// re-export for cleaner imports
pub use self::ancestor::AncestorRef;
pub use self::path::{Branch, TreePath, MAX_DEPTH, SLOT_COUNT};
pub use self::tree::PedigreeTree;
