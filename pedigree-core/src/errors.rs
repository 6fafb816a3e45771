use thiserror::Error;

use crate::models::path::MAX_DEPTH;

#[derive(Error, Debug)]
pub enum PedigreeError {
    #[error("Empty pedigree path")]
    EmptyPath,

    #[error("Unknown segment '{segment}' in pedigree path '{path}'")]
    UnknownSegment { path: String, segment: String },

    #[error("Pedigree path '{0}' exceeds the maximum depth of {max} generations", max = MAX_DEPTH)]
    DepthExceeded(String),
}
