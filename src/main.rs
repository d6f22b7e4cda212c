//! rsdocgen — generate structure and function references from Rust sources.
//!
//! Scans a source tree for `pub struct` and `fn` declarations with a set of
//! regexes (no real parser) and writes four markdown files:
//!
//! - `zero-copy-reference.md` — `#[account(zero_copy)]` structs (only if any)
//! - `api-structures.md` — every struct, by category
//! - `function-reference.md` — public functions, by source file
//! - `auto-generated-index.md` — counts and links
//!
//! Usage: `rsdocgen --source-dir programs/borrow-lending/src --output-dir docs/auto-generated -v`

mod classify;
mod config;
mod extract;
mod model;
mod parser;
mod render;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use config::{GeneratorConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "rsdocgen",
    about = "Generate reference documentation from Rust source code"
)]
struct Cli {
    /// Source directory to scan recursively for .rs files
    #[arg(short = 's', long, default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Output directory for generated documentation (created if missing)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print progress and statistics
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Also write the extracted declarations as declarations.json
    #[arg(long)]
    json: bool,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            source_dir: cli.source_dir,
            output_dir: cli.output_dir,
            verbose: cli.verbose,
            json: cli.json,
        }
    }
}

fn main() -> Result<()> {
    let config = GeneratorConfig::from(Cli::parse());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&config)
}

/// Extract from `config.source_dir`, then render and write every artifact.
fn run(config: &GeneratorConfig) -> Result<()> {
    if config.verbose {
        println!("Scanning source directory: {}", config.source_dir.display());
        println!("Output directory: {}", config.output_dir.display());
    }

    let files = source::discover(&config.source_dir)?;
    let mut extractor = extract::Extractor::new();
    let stats = extractor.extract_files(&files);
    let catalog = extractor.catalog();

    if config.verbose {
        println!(
            "Found {} structs and {} functions in {} files",
            catalog.structs.len(),
            catalog.functions.len(),
            stats.files_scanned
        );
        if stats.files_skipped > 0 {
            println!("Skipped {} unreadable files", stats.files_skipped);
        }
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let generated_at = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    for renderer in render::create_renderers(&generated_at, config.json) {
        match renderer.render(&catalog) {
            Some(content) => {
                let path = write_artifact(&config.output_dir, renderer.file_name(), &content)?;
                println!("Generated: {}", path.display());
            }
            None => debug!("skipping {}: nothing to document", renderer.file_name()),
        }
    }

    println!("Documentation generation complete!");
    Ok(())
}

/// Write one fully rendered artifact in a single call.
fn write_artifact(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
