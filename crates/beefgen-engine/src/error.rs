//! Error types for beefgen-engine.
//!
//! The engine core never fails: heuristic misses pass through and unmatched
//! methods drop by design. The only fallible operation is validating the
//! loosely-typed metadata tree once at the boundary.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for metadata boundary operations.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors raised while validating raw struct metadata.
#[derive(Debug, Error, Diagnostic)]
pub enum MetadataError {
    /// The metadata tree is not well-formed JSON or does not match the
    /// expected `{structName: [{name, type, ...}]}` schema.
    #[error("failed to parse struct metadata: {0}")]
    #[diagnostic(code(beefgen::metadata::parse))]
    Parse(#[from] serde_json::Error),
}
