use crate::{MethodDefinition, Render, StructProperty};
use smol_str::SmolStr;

/// A flattened C union, emitted as a `[CRepr, Union]` struct nested inside
/// its owning struct. Unions never carry methods or unions of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructUnion {
    pub name: SmolStr,
    pub properties: Vec<StructProperty>,
}

/// A fully assembled struct binding: normalized name, flattened properties,
/// the methods bound to it and any synthesized unions.
#[derive(Debug, Clone, Default)]
pub struct StructModel {
    /// Prefix-stripped name.
    pub name: SmolStr,
    pub properties: Vec<StructProperty>,
    pub methods: Vec<MethodDefinition>,
    pub unions: Vec<StructUnion>,
    pub is_generic: bool,
}

impl StructModel {
    /// An empty model, as synthesized for implicit structs.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Indent every non-empty line of already-rendered text by one level.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::from("\n")
            } else {
                format!("    {line}\n")
            }
        })
        .collect()
}

impl Render for StructUnion {
    fn render(&self) -> String {
        let mut out = format!("\n[CRepr, Union]\npublic struct {}\n{{\n", self.name);
        for property in &self.properties {
            out.push_str("    ");
            out.push_str(&property.render());
        }
        out.push_str("}\n");
        out
    }
}

impl Render for StructModel {
    fn render(&self) -> String {
        let generic = if self.is_generic { "<T>" } else { "" };
        let mut out = format!("[CRepr]\npublic struct {}{}\n{{\n", self.name, generic);
        for property in &self.properties {
            out.push_str("    ");
            out.push_str(&property.render());
        }
        for method in &self.methods {
            out.push_str(&indent(&method.render()));
        }
        for union in &self.unions {
            out.push_str(&indent(&union.render()));
        }
        out.push_str("}\n");
        out
    }
}
