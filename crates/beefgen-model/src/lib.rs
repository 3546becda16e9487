//! Binding model for the Dear ImGui to Beef binding generator.
//!
//! The model is plain data: struct declarations, their properties, the
//! methods bound to them and any flattened unions. It is produced by the
//! assembly engine and consumed by the emission side through the [`Render`]
//! contract. Nothing in this crate touches raw C type spellings; every type
//! string stored here is already in its Beef spelling.

mod method;
mod property;
mod structs;

pub use method::{render_args, MethodDefinition, MethodKind, MethodParam};
pub use property::{StructProperty, Visibility};
pub use structs::{StructModel, StructUnion};

/// Emission contract for generated Beef declarations.
///
/// Each model value renders itself to declaration text; composite values
/// render their children recursively with one indentation level added.
/// Concatenating rendered output into files is the caller's business.
pub trait Render {
    fn render(&self) -> String;
}
