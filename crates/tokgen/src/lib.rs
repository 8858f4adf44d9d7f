mod emit;
mod error;
pub mod keywords;
pub mod token_def;

#[cfg(test)]
mod token_def_tests;

pub use emit::{emit, emit_c_header, emit_rust_module, EmitOptions, Target};
pub use emit::{DEFAULT_PREFIX, DEFAULT_SOURCE_NAME};
pub use error::EmitError;
pub use token_def::{extract, TokenList, TokenRule};

/// Extract the token rules of `grammar` and render them for `options.target`.
pub fn generate(grammar: &str, options: &EmitOptions) -> Result<String, EmitError> {
    let tokens = extract(grammar);
    emit(&tokens, options)
}
