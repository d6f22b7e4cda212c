//! Source discovery — every `.rs` file under a root, in sorted order.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File extension recognized as a source file.
pub const SOURCE_EXTENSION: &str = "rs";

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scanned root, `/`-separated
    pub relative: String,
}

/// Recursively collect source files under `root`.
///
/// Paths are sorted so that extraction order, and therefore every rendered
/// artifact, is reproducible. Unreadable directories are skipped with a warning.
pub fn discover(root: &Path) -> Result<Vec<SourceFile>> {
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        SOURCE_EXTENSION
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid source directory: {}", root.display()))? {
        match entry {
            Ok(path) if path.is_file() => {
                let relative = relative_path(root, &path);
                files.push(SourceFile { path, relative });
            }
            Ok(_) => {}
            Err(e) => warn!("skipping {}: {}", e.path().display(), e.error()),
        }
    }

    if files.is_empty() {
        warn!("no .{} files found under {}", SOURCE_EXTENSION, root.display());
    }

    files.sort();
    debug!("discovered {} source files under {}", files.len(), root.display());
    Ok(files)
}

/// `root/models/reserve.rs` → `models/reserve.rs`
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
