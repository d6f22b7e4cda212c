//! Extraction phase — owns the declaration collections for one run.

use crate::model::{Catalog, Declaration, FunctionDoc, StructDoc};
use crate::parser::rust::RegexScanner;
use crate::parser::Scanner;
use crate::source::SourceFile;
use std::fs;
use tracing::{debug, warn};

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Accumulates declarations file by file.
///
/// Records are appended in scan order and never merged: the same name in two
/// files produces two records.
pub struct Extractor<S = RegexScanner> {
    scanner: S,
    structs: Vec<StructDoc>,
    functions: Vec<FunctionDoc>,
}

impl Extractor {
    pub fn new() -> Self {
        Self::with_scanner(RegexScanner)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scanner> Extractor<S> {
    pub fn with_scanner(scanner: S) -> Self {
        Self {
            scanner,
            structs: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Scan one file's text. Returns the number of declarations found.
    pub fn extract_source(&mut self, input: &str, source_file: &str) -> usize {
        let mut found = 0;
        for decl in self.scanner.scan(input, source_file) {
            debug!(
                "{}:{} {} ({})",
                decl.source_file(),
                decl.line(),
                decl.name(),
                if decl.doc().is_empty() { "undocumented" } else { "documented" }
            );
            match decl {
                Declaration::Struct(s) => self.structs.push(s),
                Declaration::Function(f) => self.functions.push(f),
            }
            found += 1;
        }
        found
    }

    /// Read and scan each file in order. Unreadable files are skipped with a
    /// warning; they never abort the run.
    pub fn extract_files(&mut self, files: &[SourceFile]) -> ExtractStats {
        let mut stats = ExtractStats::default();
        for file in files {
            match fs::read_to_string(&file.path) {
                Ok(content) => {
                    self.extract_source(&content, &file.relative);
                    stats.files_scanned += 1;
                }
                Err(e) => {
                    warn!("failed to process {}: {}", file.path.display(), e);
                    stats.files_skipped += 1;
                }
            }
        }
        stats
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.structs, &self.functions)
    }
}
