//! Run configuration resolved from the command line.

use std::path::PathBuf;

pub const DEFAULT_SOURCE_DIR: &str = "programs/borrow-lending/src";
pub const DEFAULT_OUTPUT_DIR: &str = "docs/auto-generated";

/// Pipeline configuration for [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Print progress and statistics
    pub verbose: bool,
    /// Also write `declarations.json`
    pub json: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: false,
            json: false,
        }
    }
}

impl GeneratorConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
