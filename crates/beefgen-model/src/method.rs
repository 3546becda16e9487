use crate::Render;
use smol_str::SmolStr;

/// A single method parameter, type already in its Beef spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
    pub name: SmolStr,
    pub ty: String,
}

impl MethodParam {
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Render for MethodParam {
    fn render(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

/// Render a parameter sequence as a declaration argument list.
pub fn render_args(args: &[MethodParam]) -> String {
    args.iter()
        .map(MethodParam::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which declaration a parsed definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Destructor,
    Instance,
    Free,
}

/// A parsed method definition.
///
/// The definition parser produces these as one flat list; assembly moves
/// constructors, destructors and instance methods onto their owning struct
/// model and leaves free functions behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    pub kind: MethodKind,
    /// Binding-facing name, prefix-stripped.
    pub name: SmolStr,
    /// The C symbol the declaration links against.
    pub symbol: String,
    /// Raw parent type spelling; empty for free functions.
    pub parent_type: String,
    /// Return type in its Beef spelling.
    pub return_type: String,
    pub args: Vec<MethodParam>,
    pub is_generic: bool,
}

impl MethodDefinition {
    pub fn new(
        kind: MethodKind,
        name: impl Into<SmolStr>,
        symbol: impl Into<String>,
        parent_type: impl Into<String>,
        return_type: impl Into<String>,
        args: Vec<MethodParam>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            symbol: symbol.into(),
            parent_type: parent_type.into(),
            return_type: return_type.into(),
            args,
            is_generic: false,
        }
    }

    pub fn generic(mut self) -> Self {
        self.is_generic = true;
        self
    }
}

impl Render for MethodDefinition {
    fn render(&self) -> String {
        format!(
            "\n[LinkName(\"{}\")]\npublic static extern {} {}({});\n",
            self.symbol,
            self.return_type,
            self.name,
            render_args(&self.args)
        )
    }
}
