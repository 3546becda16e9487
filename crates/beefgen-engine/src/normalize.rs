//! Raw C type spelling normalization.
//!
//! cimgui metadata carries type spellings straight out of the headers:
//! `const` noise, `unsigned`/`signed` qualifiers, `_t` suffixes, `ImGui`/`Im`
//! namespace prefixes, underscore-encoded template instantiations
//! (`ImVector_ImDrawChannel`) and single-level function-pointer spellings
//! (`const char*(*)(void* user_data)`). Everything here is a best-effort
//! textual rewrite into the Beef spelling against that finite vocabulary.
//! Unknown inputs pass through with whatever edits applied; nothing fails.

use beefgen_model::{render_args, MethodParam, StructProperty};
use smol_str::{format_smolstr, SmolStr};

/// Beef keywords that collide with cimgui identifier names.
pub const RESERVED_WORDS: &[&str] = &["in", "repeat", "ref", "out", "where"];

/// Rewrite a raw C type spelling into its Beef spelling.
///
/// Underscored spellings that are neither function pointers nor `_t`-suffixed
/// are template encodings and go through [`normalize_template`]. Everything
/// else gets the qualifier/suffix/prefix edits, bare-`int` widening to
/// `int32`, and function-pointer decomposition into a `function` type.
pub fn normalize_type(raw: &str) -> String {
    if raw.contains('_')
        && !is_function_pointer(raw)
        && !raw.ends_with("_t")
        && !raw.ends_with("_t*")
    {
        return normalize_template(raw);
    }

    let mut fixed = raw
        .replace("const ", "")
        .replace(" const", "")
        .replace("unsigned ", "u")
        .replace("signed ", "")
        .replace("_t", "");
    fixed = strip_prefix(&fixed).to_string();

    if fixed.ends_with("int") {
        fixed.push_str("32");
    } else if fixed.ends_with("int*") {
        fixed.truncate(fixed.len() - 4);
        fixed.push_str("int32*");
    }

    if is_function_pointer(&fixed) {
        if let (Some(open), Some(close)) = (fixed.find('('), fixed.find(')')) {
            let ret = fixed[..open].to_string();
            let args = parse_params(&fixed[close + 1..]);
            fixed = format!("function {ret}({})", render_args(&args));
        }
    }

    fixed
}

/// Decompose an underscore-encoded template instantiation.
///
/// `Outer_Inner` splits on the first underscore; both halves go back through
/// [`normalize_type`], so nested encodings (`ImVector_ImVector_float`)
/// resolve recursively. A trailing `Ptr` token on the composed spelling
/// becomes `*`. `STB_TexteditState` and `SDL_`-prefixed names are opaque
/// external types and pass through verbatim; that check runs before any
/// other edit.
pub fn normalize_template(raw: &str) -> String {
    let mut fixed = raw.replace("const ", "");

    if fixed == "STB_TexteditState" || fixed.starts_with("SDL_") {
        return fixed;
    }

    fixed = fixed.replace("const_", "");

    if let Some(split) = fixed.find('_') {
        let outer = normalize_type(&fixed[..split]);
        let inner = normalize_type(&fixed[split + 1..]);
        fixed = format!("{outer}<{inner}");
    }

    if fixed.ends_with("Ptr") {
        fixed.truncate(fixed.len() - 3);
        fixed.push('*');
    } else if fixed.trim_end_matches('*').ends_with("Ptr") {
        // FooPtr* keeps its trailing star: drop the token in place.
        let cut = fixed.len() - 4;
        fixed.replace_range(cut..cut + 3, "");
        fixed.push('*');
    }

    fixed.push('>');
    fixed
}

/// Strip the `ImGui` namespace prefix, else the `Im` one, else nothing.
/// The longer prefix wins.
pub fn strip_prefix(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix("ImGui") {
        rest
    } else if let Some(rest) = name.strip_prefix("Im") {
        rest
    } else {
        name
    }
}

/// Disambiguate identifiers that collide with a Beef keyword by appending
/// a trailing underscore.
pub fn safe_name(name: &str) -> SmolStr {
    if RESERVED_WORDS.contains(&name) {
        format_smolstr!("{name}_")
    } else {
        SmolStr::new(name)
    }
}

/// A spelling whose last character closes an argument list is a
/// function-pointer spelling.
pub fn is_function_pointer(spelling: &str) -> bool {
    spelling.ends_with(')')
}

/// Raw union-typed property spellings start with the `union` keyword.
pub fn is_union(spelling: &str) -> bool {
    spelling.starts_with("union")
}

/// Parse the member list out of a raw inline-union spelling.
///
/// The body between the braces splits on `;`; each statement's first two
/// whitespace-delimited tokens are the member's raw type and name, any
/// further tokens are ignored. Member types come back normalized.
pub fn union_members(union: &str) -> Vec<StructProperty> {
    let body = match union.find('{') {
        Some(open) => &union[open..],
        None => union,
    };
    let body = body.trim_matches(|c| c == '{' || c == '}');

    let mut members = Vec::new();
    for statement in body.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        let mut tokens = statement.split_whitespace();
        let (Some(ty), Some(name)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        members.push(StructProperty::field(safe_name(name), normalize_type(ty)));
    }
    members
}

/// Parse a textual parameter list (the `(type name, ...)` tail of a
/// function-pointer spelling) into ordered parameters. The last whitespace
/// token of each fragment is the parameter name; everything before it is
/// the raw type.
pub fn parse_params(args: &str) -> Vec<MethodParam> {
    let list = args.trim().trim_start_matches('(').trim_end_matches(')');

    let mut params = Vec::new();
    for fragment in list.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() || fragment == "void" {
            continue;
        }
        let (raw_ty, name) = match fragment.rsplit_once(char::is_whitespace) {
            Some((ty, name)) => (ty.trim_end(), name),
            None => (fragment, ""),
        };
        params.push(MethodParam {
            name: safe_name(name),
            ty: normalize_type(raw_ty),
        });
    }
    params
}

/// Turn a whole function-pointer spelling into a parameter descriptor.
///
/// The name is the literal substring between the first parenthesis pair
/// (a `*` in there stays; anonymous spellings yield `*`), the type is the
/// normalized spelling itself. Returns `None` when no parenthesis pair
/// exists.
pub fn parameter_from_function_pointer(spelling: &str) -> Option<MethodParam> {
    let open = spelling.find('(')?;
    let close = spelling.find(')')?;
    if close < open {
        return None;
    }
    Some(MethodParam {
        name: SmolStr::new(&spelling[open + 1..close]),
        ty: normalize_type(spelling),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_bare_int_spellings() {
        assert_eq!(normalize_type("int"), "int32");
        assert_eq!(normalize_type("int*"), "int32*");
        assert_eq!(normalize_type("unsigned int"), "uint32");
        assert_eq!(normalize_type("unsigned int*"), "uint32*");
        assert_eq!(normalize_type("signed int"), "int32");
    }

    #[test]
    fn strips_qualifiers_and_suffixes() {
        assert_eq!(normalize_type("const char*"), "char*");
        assert_eq!(normalize_type("char const*"), "char*");
        assert_eq!(normalize_type("unsigned char"), "uchar");
        assert_eq!(normalize_type("uint64_t"), "uint64");
        assert_eq!(normalize_type("size_t"), "size");
    }

    #[test]
    fn strips_namespace_prefixes_longest_first() {
        assert_eq!(normalize_type("ImGuiContext"), "Context");
        assert_eq!(normalize_type("const ImGuiIO*"), "IO*");
        assert_eq!(normalize_type("ImDrawList*"), "DrawList*");
        assert_eq!(normalize_type("ImGuiID"), "ID");
        assert_eq!(strip_prefix("ImGuiStorage"), "Storage");
        assert_eq!(strip_prefix("ImVec2"), "Vec2");
        assert_eq!(strip_prefix("bool"), "bool");
    }

    #[test]
    fn normalized_spellings_are_fixed_points() {
        for spelling in ["float", "Vec2", "Vector<DrawChannel>", "char*", "uint32"] {
            assert_eq!(normalize_type(spelling), spelling);
        }
    }

    #[test]
    fn decomposes_underscore_templates() {
        assert_eq!(
            normalize_type("ImVector_ImDrawChannel"),
            "Vector<DrawChannel>"
        );
        assert_eq!(normalize_type("ImPool_ImGuiTabBar"), "Pool<TabBar>");
        assert_eq!(normalize_type("ImVector_float"), "Vector<float>");
    }

    #[test]
    fn decomposes_nested_templates_on_first_underscore() {
        assert_eq!(
            normalize_type("ImVector_ImVector_float"),
            "Vector<Vector<float>>"
        );
    }

    #[test]
    fn rewrites_trailing_ptr_token() {
        assert_eq!(
            normalize_type("ImVector_ImDrawListPtr"),
            "Vector<DrawList*>"
        );
        assert_eq!(normalize_type("ImVector_const_charPtr"), "Vector<char*>");
    }

    #[test]
    fn template_exemptions_pass_through_verbatim() {
        assert_eq!(normalize_type("STB_TexteditState"), "STB_TexteditState");
        assert_eq!(normalize_type("SDL_Window"), "SDL_Window");
    }

    #[test]
    fn underscored_t_suffixed_spellings_skip_template_decomposition() {
        assert_eq!(normalize_type("ImS8_t"), "S8");
        assert_eq!(normalize_type("wchar_t*"), "wchar*");
    }

    #[test]
    fn decomposes_function_pointer_spellings() {
        assert_eq!(
            normalize_type("const char*(*)(void* user_data)"),
            "function char*(void* user_data)"
        );
        assert_eq!(
            normalize_type("void (*)(const ImDrawList* parent_list, const ImDrawCmd* cmd)"),
            "function void (DrawList* parent_list, DrawCmd* cmd)"
        );
    }

    #[test]
    fn guards_reserved_names() {
        assert_eq!(safe_name("ref"), "ref_");
        assert_eq!(safe_name("in"), "in_");
        assert_eq!(safe_name("repeat"), "repeat_");
        assert_eq!(safe_name("out"), "out_");
        assert_eq!(safe_name("where"), "where_");
        assert_eq!(safe_name("value"), "value");
        assert_eq!(safe_name("ref_"), "ref_");
    }

    #[test]
    fn detects_function_pointers_by_closing_delimiter() {
        assert!(is_function_pointer("void (*)(int v)"));
        assert!(!is_function_pointer(""));
        assert!(!is_function_pointer("int"));
    }

    #[test]
    fn parses_union_members_in_declared_order() {
        let members = union_members("union { int val_i; float val_f; }");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "val_i");
        assert_eq!(members[0].ty, "int32");
        assert_eq!(members[1].name, "val_f");
        assert_eq!(members[1].ty, "float");
    }

    #[test]
    fn union_members_ignore_tokens_past_the_name() {
        let members = union_members("union { ImGuiID id and more; }");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "id");
        assert_eq!(members[0].ty, "ID");
    }

    #[test]
    fn parses_parameter_lists() {
        let params = parse_params("(const ImDrawList* parent_list, unsigned int count)");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].ty, "DrawList*");
        assert_eq!(params[0].name, "parent_list");
        assert_eq!(params[1].ty, "uint32");
        assert_eq!(params[1].name, "count");
        assert!(parse_params("()").is_empty());
    }

    #[test]
    fn parameter_names_collide_with_keywords_get_guarded() {
        let params = parse_params("(void* in)");
        assert_eq!(params[0].name, "in_");
        assert_eq!(params[0].ty, "void*");
    }

    #[test]
    fn extracts_parameter_from_function_pointer_spelling() {
        let param =
            parameter_from_function_pointer("void (*Callback)(int value)").unwrap();
        // The name keeps whatever sits between the name parens, star included.
        assert_eq!(param.name, "*Callback");
        assert_eq!(param.ty, "function void (int32 value)");
        assert!(parameter_from_function_pointer("no parens here").is_none());
    }
}
