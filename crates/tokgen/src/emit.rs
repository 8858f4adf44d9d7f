use std::collections::HashMap;

use codegen::*;
use convert_case::{Boundary, Case, Casing, Converter};
use log::debug;

use crate::error::EmitError;
use crate::keywords::{keyword_count, keyword_lexemes};
use crate::token_def::TokenList;

pub const DEFAULT_SOURCE_NAME: &str = "nova.g4";
pub const DEFAULT_PREFIX: &str = "nova";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// C header with `#define` and `static const char *const` arrays
    #[default]
    CHeader,
    /// Rust module with statics and a token enum
    Rust,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// grammar file name written into the banner
    pub source_name: String,
    /// prefix of every generated identifier
    pub prefix: String,
    pub target: Target,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            target: Target::default(),
        }
    }
}

// digits stay attached to the word before them, `nova2` -> `NOVA2`
fn prefix_converter(case: Case) -> Converter {
    Converter::new()
        .set_boundaries(&[
            Boundary::Underscore,
            Boundary::Hyphen,
            Boundary::Space,
            Boundary::LowerUpper,
        ])
        .to_case(case)
}

impl EmitOptions {
    fn upper_prefix(&self) -> String {
        prefix_converter(Case::UpperSnake).convert(&self.prefix)
    }

    fn lower_prefix(&self) -> String {
        prefix_converter(Case::Snake).convert(&self.prefix)
    }

    fn banner(&self) -> String {
        format!(
            "// Auto-generated from {}. Do not edit manually.",
            self.source_name
        )
    }
}

pub fn emit(tokens: &TokenList, options: &EmitOptions) -> Result<String, EmitError> {
    debug!(
        "emitting {} tokens as {:?} with prefix `{}`",
        tokens.len(),
        options.target,
        options.prefix
    );
    match options.target {
        Target::CHeader => Ok(emit_c_header(tokens, options)),
        Target::Rust => emit_rust_module(tokens, options),
    }
}

pub fn emit_c_header(tokens: &TokenList, options: &EmitOptions) -> String {
    let upper = options.upper_prefix();
    let lower = options.lower_prefix();

    let mut out = String::new();
    out += &format!("{}\n", options.banner());
    out += "#pragma once\n\n";

    out += &format!(
        "#define {}_TOKEN_KEYWORD_COUNT {}\n",
        upper,
        keyword_count(tokens)
    );

    out += &format!("static const char *const {}_token_names[] = {{\n", lower);
    for name in tokens.names() {
        out += &format!("    \"{}\",\n", name);
    }
    out += "};\n\n";

    // lexemes are embedded unescaped, keywords never contain quotes
    out += &format!("static const char *const {}_keyword_lexemes[] = {{\n", lower);
    for lexeme in keyword_lexemes(tokens) {
        out += &format!("    \"{}\",\n", lexeme);
    }
    out += "};\n";

    out
}

fn variant_name(token_name: &str) -> String {
    let variant = token_name.to_case(Case::Pascal);
    // only Pascal case keyword
    if variant == "Self" {
        return "Self_".to_string();
    }
    variant
}

fn check_variants(tokens: &TokenList) -> Result<Vec<String>, EmitError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut variants = Vec::with_capacity(tokens.len());
    for name in tokens.names() {
        let variant = variant_name(name);
        if let Some(first) = seen.get(&variant) {
            if *first == name {
                return Err(EmitError::DuplicateName(name.to_string()));
            }
            return Err(EmitError::VariantCollision {
                first: first.to_string(),
                second: name.to_string(),
                variant,
            });
        }
        seen.insert(variant.clone(), name);
        variants.push(variant);
    }
    Ok(variants)
}

fn static_str_slice(name: &str, items: &[&str]) -> String {
    let mut decl = format!("pub static {}: &[&str] = &[\n", name);
    for item in items {
        decl += &format!("    \"{}\",\n", item.escape_default());
    }
    decl += "];";
    decl
}

pub fn emit_rust_module(tokens: &TokenList, options: &EmitOptions) -> Result<String, EmitError> {
    let variants = check_variants(tokens)?;

    let upper = options.upper_prefix();
    let names_static = format!("{}_TOKEN_NAMES", upper);
    let enum_name = format!("{}Token", options.prefix.to_case(Case::Pascal));

    let mut base = Scope::new();
    base.raw(&options.banner());
    base.raw(&format!(
        "pub const {}_TOKEN_KEYWORD_COUNT: usize = {};",
        upper,
        keyword_count(tokens)
    ));

    let names: Vec<&str> = tokens.names().collect();
    base.raw(&static_str_slice(&names_static, &names));
    base.raw(&static_str_slice(
        &format!("{}_KEYWORD_LEXEMES", upper),
        &keyword_lexemes(tokens),
    ));

    // a zero-variant enum cannot be repr(u32)
    if variants.is_empty() {
        return Ok(base.to_string());
    }

    let mut token_enum = Enum::new(&enum_name);
    token_enum.derive("Clone");
    token_enum.derive("Copy");
    token_enum.derive("PartialEq");
    token_enum.derive("Eq");
    token_enum.derive("Debug");
    token_enum.derive("Hash");
    token_enum.repr("u32");
    token_enum.vis("pub");
    variants.iter().for_each(|x| {
        token_enum.new_variant(x);
    });

    let mut token_impl = Impl::new(&enum_name);

    // (name: &str) -> Option<Token>
    let mut from_name = Function::new("from_name");
    from_name.vis("pub").arg("name", "&str").ret("Option<Self>");
    let mut from_name_match = Block::new("match name");
    names.iter().zip(&variants).for_each(|(name, variant)| {
        from_name_match.line(format!("\"{}\" => Some({}::{}),", name, &enum_name, variant));
    });
    from_name_match.line("_ => None,");
    from_name.push_block(from_name_match);

    // (id: u32) -> Option<Token>, id is the position in the name table
    let mut from_id = Function::new("from_id");
    from_id.vis("pub").arg("id", "u32").ret("Option<Self>");
    let mut from_id_match = Block::new("match id");
    variants.iter().enumerate().for_each(|(id, variant)| {
        from_id_match.line(format!("{} => Some({}::{}),", id, &enum_name, variant));
    });
    from_id_match.line("_ => None,");
    from_id.push_block(from_id_match);

    let mut to_name = Function::new("to_name");
    to_name
        .vis("pub")
        .arg_self()
        .ret("&'static str")
        .line(format!("{}[self as usize]", names_static));

    // enum is repr(u32), discriminants follow declaration order
    let mut to_id = Function::new("to_id");
    to_id.vis("pub").arg_self().ret("u32").line("self as u32");

    token_impl.push_fn(from_name);
    token_impl.push_fn(from_id);
    token_impl.push_fn(to_name);
    token_impl.push_fn(to_id);

    base.push_enum(token_enum);
    base.push_impl(token_impl);

    Ok(base.to_string())
}
