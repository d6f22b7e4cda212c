//! `function-reference.md` — public functions grouped by source file.

use crate::model::{Catalog, FunctionDoc};
use crate::render::markdown::render_function;
use crate::render::Renderer;
use std::collections::BTreeMap;

pub struct FunctionsRenderer;

impl Renderer for FunctionsRenderer {
    fn file_name(&self) -> &str {
        "function-reference.md"
    }

    fn render(&self, catalog: &Catalog) -> Option<String> {
        let public = catalog.public_functions();

        let mut output = String::new();
        output.push_str("# Function Reference\n\n");
        output.push_str("Reference documentation for all public functions in the protocol.\n\n");
        output.push_str(&format!("Total public functions: **{}**\n", public.len()));

        for (source_file, functions) in group_by_file(&public) {
            output.push_str(&format!("\n## {}\n", source_file));
            for func in functions {
                output.push('\n');
                output.push_str(&render_function(func));
            }
        }

        Some(output)
    }
}

/// Group by source path. Paths iterate in lexicographic order; functions keep
/// their extraction order within a path.
fn group_by_file<'a>(functions: &[&'a FunctionDoc]) -> BTreeMap<&'a str, Vec<&'a FunctionDoc>> {
    let mut by_file: BTreeMap<&str, Vec<&FunctionDoc>> = BTreeMap::new();
    for &func in functions {
        by_file.entry(func.source_file.as_str()).or_default().push(func);
    }
    by_file
}
