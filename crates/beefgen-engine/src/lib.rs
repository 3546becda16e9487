//! Type normalization and struct model assembly for the Dear ImGui to Beef
//! binding generator.
//!
//! This crate provides:
//! - Raw C type spelling → Beef spelling normalization (templates, function
//!   pointers, prefixes, reserved names)
//! - The metadata boundary: one-shot validation of the loosely-typed
//!   `structs_and_enums.json` tree into typed records
//! - Struct model assembly: union flattening, method binding, implicit
//!   struct synthesis and generic promotion
//!
//! # Architecture
//!
//! ```text
//! metadata JSON ──► Metadata ──┐
//!                              ├─► assemble_structs ──► Assembly
//! parsed method list ──────────┘        │
//!                                  normalize::*
//! ```

mod assemble;
mod error;
mod metadata;
pub mod normalize;

pub use assemble::{assemble_structs, Assembly};
pub use error::{MetadataError, Result};
pub use metadata::{Metadata, RawProperty, RawStructs};

use beefgen_model::MethodDefinition;

/// Parse a raw metadata document and assemble struct models from it, with
/// implicit-struct creation enabled. The residual of the returned assembly
/// holds the methods that bound to no struct (free functions).
pub fn assemble_from_json(
    json: &str,
    methods: Vec<MethodDefinition>,
) -> miette::Result<Assembly> {
    let metadata = Metadata::from_json(json)?;
    Ok(assemble_structs(&metadata, methods, true))
}
