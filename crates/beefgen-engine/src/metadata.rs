//! Struct metadata parsing (the `structs_and_enums.json` shape).
//!
//! The header-generation tool ships struct layouts as a loosely-typed JSON
//! tree. It is validated here, once, into typed records; everything past
//! this boundary assumes well-formed input. Key order of the struct map is
//! the declaration order of the source headers and must survive intact.

use crate::error::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// Struct-name → ordered property descriptors, in source declaration order.
pub type RawStructs = IndexMap<String, Vec<RawProperty>>;

/// One raw property descriptor as authored by the metadata tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawProperty {
    pub name: String,
    /// Raw C type spelling, or an inline `union {...}` body.
    #[serde(rename = "type")]
    pub ty: String,
    /// Fixed-size array element count; absent for scalars.
    #[serde(default)]
    pub size: Option<u32>,
    /// Space-separated template argument spelling, present when the raw
    /// type carries a pre-expanded template instantiation.
    #[serde(default)]
    pub template_type: Option<String>,
}

/// The validated metadata tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub structs: RawStructs,
}

impl Metadata {
    /// Validate a raw metadata document. This is the single point where
    /// malformed input turns into an error; the assembler itself performs
    /// no validation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
