//! Struct model assembly.
//!
//! Takes the validated metadata tree plus the flat method list produced by
//! the definition parser and builds one [`StructModel`] per struct:
//! properties normalized, inline unions flattened into storage-plus-forwarder
//! properties, and struct-scoped methods moved off the flat list onto their
//! owning model. Methods whose parent has no explicit struct entry get an
//! implicit, property-less model synthesized for them.

use crate::metadata::{Metadata, RawProperty};
use crate::normalize::{is_union, normalize_type, safe_name, strip_prefix, union_members};
use beefgen_model::{
    MethodDefinition, MethodKind, StructModel, StructProperty, StructUnion, Visibility,
};
use rustc_hash::FxHashMap;
use smol_str::{format_smolstr, SmolStr};

/// Assembly output: the struct models plus the residual methods that bound
/// to no struct. With auto-creation on, the residual holds free functions
/// only; with it off, unmatched struct-scoped methods stay there untouched.
#[derive(Debug, Default)]
pub struct Assembly {
    pub structs: Vec<StructModel>,
    pub residual: Vec<MethodDefinition>,
}

/// Assemble struct models from raw metadata and the parsed method list.
///
/// The method list is taken by value; callers get the unbound remainder
/// back in [`Assembly::residual`]. Output order is deterministic: explicit
/// structs in metadata key order, then implicit structs in the order of the
/// method that triggered each one.
pub fn assemble_structs(
    metadata: &Metadata,
    mut methods: Vec<MethodDefinition>,
    auto_create: bool,
) -> Assembly {
    let mut structs = Vec::new();

    for (raw_name, raw_props) in &metadata.structs {
        let name = strip_prefix(raw_name);
        let bound = drain_struct_methods(&mut methods, name);
        let is_generic = bound
            .iter()
            .any(|m| m.kind == MethodKind::Instance && m.is_generic);

        let mut properties = Vec::new();
        let mut unions = Vec::new();
        for prop in raw_props {
            if is_union(&prop.ty) {
                flatten_union(name, &prop.ty, &mut properties, &mut unions);
            } else {
                properties.push(scalar_property(prop));
            }
        }

        structs.push(StructModel {
            name: SmolStr::new(name),
            properties,
            methods: bound,
            unions,
            is_generic,
        });
    }

    if auto_create {
        bind_implicit_structs(&mut structs, &mut methods);
    }

    Assembly {
        structs,
        residual: methods,
    }
}

/// Remove every constructor, destructor and instance method whose parent
/// resolves to `parent` from the flat list, returning them grouped by kind
/// (constructors first, then destructors, then instance methods), each
/// group in original list order.
fn drain_struct_methods(methods: &mut Vec<MethodDefinition>, parent: &str) -> Vec<MethodDefinition> {
    let mut bound = Vec::new();
    for kind in [
        MethodKind::Constructor,
        MethodKind::Destructor,
        MethodKind::Instance,
    ] {
        let mut i = 0;
        while i < methods.len() {
            if methods[i].kind == kind && strip_prefix(&methods[i].parent_type) == parent {
                bound.push(methods.remove(i));
            } else {
                i += 1;
            }
        }
    }
    bound
}

/// Flatten one raw union-typed property: a private storage field of the
/// synthetic union type plus one public forwarding accessor per member,
/// member order preserved.
fn flatten_union(
    struct_name: &str,
    raw_union: &str,
    properties: &mut Vec<StructProperty>,
    unions: &mut Vec<StructUnion>,
) {
    let union_name = format_smolstr!("{struct_name}Union{}", unions.len());
    let storage = format_smolstr!("Union{}", unions.len());
    let members = union_members(raw_union);

    properties.push(
        StructProperty::field(storage.clone(), union_name.as_str())
            .with_accessor("= .()")
            .with_visibility(Visibility::Private),
    );
    for member in &members {
        let forwarder = format!(
            "{{ get {{ return {storage}.{0}; }} set mut {{ {storage}.{0} = value; }} }}",
            member.name
        );
        properties.push(
            StructProperty::field(member.name.clone(), member.ty.clone())
                .with_accessor(forwarder),
        );
    }

    unions.push(StructUnion {
        name: union_name,
        properties: members,
    });
}

/// Normalize one non-union property descriptor.
///
/// A descriptor carrying `template_type` has the underscore-joined encoding
/// of that spelling re-expanded to its spaced form first, so the template
/// decomposer sees `Outer_Inner Args` and normalizes the argument as one
/// piece instead of splitting it on its own underscores.
fn scalar_property(prop: &RawProperty) -> StructProperty {
    let mut ty = prop.ty.clone();
    if let Some(template) = &prop.template_type {
        let encoded = template.replace(' ', "_");
        ty = ty.replace(&encoded, template);
    }
    StructProperty::field(safe_name(&prop.name), normalize_type(&ty)).with_size(prop.size)
}

/// Find-or-create a struct model for every leftover instance method, attach
/// the method, and rewrite self-typed arguments to the generic form
/// `Parent<T>` (pointer markers preserved, position unchanged). Leftover
/// constructors and destructors are dropped; free functions stay.
fn bind_implicit_structs(structs: &mut Vec<StructModel>, methods: &mut Vec<MethodDefinition>) {
    let mut index: FxHashMap<SmolStr, usize> = structs
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.clone(), i))
        .collect();

    let mut residual = Vec::new();
    for mut method in std::mem::take(methods) {
        match method.kind {
            MethodKind::Instance => {}
            MethodKind::Constructor | MethodKind::Destructor => continue,
            MethodKind::Free => {
                residual.push(method);
                continue;
            }
        }

        let parent_name = SmolStr::new(strip_prefix(&method.parent_type));
        let idx = match index.get(&parent_name) {
            Some(&i) => i,
            None => {
                let mut model = StructModel::new(parent_name.clone());
                model.is_generic = method.is_generic;
                structs.push(model);
                index.insert(parent_name.clone(), structs.len() - 1);
                structs.len() - 1
            }
        };

        for arg in &mut method.args {
            let base = arg.ty.replace('*', "");
            if base == parent_name.as_str() {
                arg.ty = arg.ty.replace(&base, &format!("{base}<T>"));
            }
        }
        structs[idx].methods.push(method);
    }
    *methods = residual;
}
