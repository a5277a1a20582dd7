//! Engine error types

use thiserror::Error;

/// Errors produced by the extraction engine.
///
/// Unrecognized content is never an error: lines the detectors cannot place
/// are folded into the open question body or dropped, and candidates below
/// the minimum length are discarded silently.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The document contained no usable text after normalization
    #[error("document '{id}' contains no usable text")]
    EmptyDocument {
        /// Identifier of the offending document
        id: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;
