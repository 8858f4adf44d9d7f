use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use tokgen::{emit, extract, EmitOptions, Target, DEFAULT_PREFIX};

// relative to --root
const DEFAULT_GRAMMAR: &str = "nova.g4";
const DEFAULT_OUTPUT: &str = "include/nova/generated_tokens.h";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputTarget {
    /// C header
    C,
    /// Rust module
    Rust,
}

impl From<OutputTarget> for Target {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::C => Target::CHeader,
            OutputTarget::Rust => Target::Rust,
        }
    }
}

/// Generate token name and keyword tables from a grammar
#[derive(Debug, Parser)]
#[command(name = "gen_tokens")]
struct Cli {
    /// Directory relative grammar and output paths are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Grammar file to read token rules from
    #[arg(long, default_value = DEFAULT_GRAMMAR)]
    grammar: PathBuf,

    /// File to write the generated tables to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Prefix for every generated identifier
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[arg(long, value_enum, default_value_t = OutputTarget::C)]
    target: OutputTarget,

    /// Fail if the output file is missing or out of date instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the generated tables instead of writing them
    #[arg(long)]
    stdout: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn grammar_path(&self) -> PathBuf {
        resolve(&self.root, &self.grammar)
    }

    fn output_path(&self) -> PathBuf {
        resolve(&self.root, &self.output)
    }

    fn emit_options(&self) -> EmitOptions {
        let source_name = self
            .grammar
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.grammar.display().to_string());

        EmitOptions {
            source_name,
            prefix: self.prefix.clone(),
            target: self.target.into(),
        }
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn render(cli: &Cli) -> Result<String> {
    let grammar_path = cli.grammar_path();
    let grammar = fs::read_to_string(&grammar_path)
        .with_context(|| format!("unable to read grammar {}", grammar_path.display()))?;

    let tokens = extract(&grammar);
    if tokens.skipped > 0 {
        info!(
            "{}: skipped {} lines which are not single-line token rules",
            grammar_path.display(),
            tokens.skipped
        );
    }

    let generated = emit(&tokens, &cli.emit_options())
        .with_context(|| format!("unable to generate tables for {}", grammar_path.display()))?;
    debug!("{} tokens, {} bytes generated", tokens.len(), generated.len());
    Ok(generated)
}

fn run(cli: &Cli, stdout: &mut impl Write) -> Result<()> {
    let generated = render(cli)?;

    if cli.stdout {
        stdout
            .write_all(generated.as_bytes())
            .context("unable to write to stdout")?;
        return Ok(());
    }

    let output_path = cli.output_path();
    if cli.check {
        let existing = fs::read_to_string(&output_path)
            .with_context(|| format!("unable to read {}", output_path.display()))?;
        if existing != generated {
            bail!(
                "{} is out of date with {}, rerun gen_tokens",
                output_path.display(),
                cli.grammar_path().display()
            );
        }
        info!("{} is up to date", output_path.display());
        return Ok(());
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("unable to create {}", parent.display()))?;
    }
    fs::write(&output_path, &generated)
        .with_context(|| format!("unable to write {}", output_path.display()))?;

    info!("Wrote {}, {} bytes", output_path.display(), generated.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    run(&cli, &mut io::stdout().lock())
}
