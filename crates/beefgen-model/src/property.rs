use crate::Render;
use smol_str::SmolStr;

/// Visibility modifier on a rendered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// One data field of a struct, or a synthetic forwarding accessor over a
/// union member.
///
/// `ty` is always the Beef spelling. `size` turns the field into a
/// fixed-size array declaration; `None` is a scalar. `accessor` carries
/// trailing declaration text: either a `{ get ... set mut ... }` forwarding
/// block or a default-initializer fragment such as `= .()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructProperty {
    pub name: SmolStr,
    pub ty: String,
    pub size: Option<u32>,
    pub accessor: Option<String>,
    pub vis: Visibility,
}

impl StructProperty {
    /// A plain public field.
    pub fn field(name: impl Into<SmolStr>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            size: None,
            accessor: None,
            vis: Visibility::Public,
        }
    }

    pub fn with_size(mut self, size: Option<u32>) -> Self {
        self.size = size;
        self
    }

    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    pub fn with_visibility(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }
}

impl Render for StructProperty {
    fn render(&self) -> String {
        let ty = match self.size {
            Some(n) => format!("{}[{}]", self.ty, n),
            None => self.ty.clone(),
        };
        match &self.accessor {
            // Accessor blocks are declarations in their own right and take
            // no statement terminator.
            Some(block) if block.starts_with('{') => {
                format!("{} {} {} {}\n", self.vis.keyword(), ty, self.name, block)
            }
            Some(init) => {
                format!("{} {} {} {};\n", self.vis.keyword(), ty, self.name, init)
            }
            None => format!("{} {} {};\n", self.vis.keyword(), ty, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_field() {
        let prop = StructProperty::field("Alpha", "float");
        assert_eq!(prop.render(), "public float Alpha;\n");
    }

    #[test]
    fn renders_fixed_size_array() {
        let prop = StructProperty::field("Colors", "Vec4").with_size(Some(55));
        assert_eq!(prop.render(), "public Vec4[55] Colors;\n");
    }

    #[test]
    fn renders_initializer_without_block_braces() {
        let prop = StructProperty::field("Union0", "StyleModUnion0")
            .with_accessor("= .()")
            .with_visibility(Visibility::Private);
        assert_eq!(prop.render(), "private StyleModUnion0 Union0 = .();\n");
    }

    #[test]
    fn renders_forwarding_accessor_block() {
        let prop = StructProperty::field("BackupInt", "int32")
            .with_accessor("{ get { return Union0.BackupInt; } set mut { Union0.BackupInt = value; } }");
        assert_eq!(
            prop.render(),
            "public int32 BackupInt { get { return Union0.BackupInt; } set mut { Union0.BackupInt = value; } }\n"
        );
    }
}
