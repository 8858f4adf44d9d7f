use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tokgen::{generate, EmitOptions, Target};

// relative to root of workspace
const GRAMMAR: &str = "data/nova.g4";

fn main() -> Result<(), anyhow::Error> {
    let package_root = env::var("CARGO_MANIFEST_DIR").context("must use cargo as build system")?;
    let workspace_root = Path::new(package_root.as_str())
        .parent()
        .and_then(Path::parent)
        .context("corrupted folder structure")?;
    let grammar_path = workspace_root.join(GRAMMAR);
    println!("cargo:rerun-if-changed={}", grammar_path.display());

    let grammar = fs::read_to_string(&grammar_path)
        .with_context(|| format!("unable to read grammar {}", grammar_path.display()))?;
    let options = EmitOptions {
        target: Target::Rust,
        ..EmitOptions::default()
    };
    let module = generate(&grammar, &options)?;

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR should be set")?);
    fs::write(out_dir.join("nova_tokens.rs"), module)?;

    Ok(())
}
