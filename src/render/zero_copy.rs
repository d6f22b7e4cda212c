//! `zero-copy-reference.md` — structs marked `#[account(zero_copy)]`.

use crate::model::Catalog;
use crate::render::markdown::render_struct;
use crate::render::Renderer;

pub struct ZeroCopyRenderer;

impl Renderer for ZeroCopyRenderer {
    fn file_name(&self) -> &str {
        "zero-copy-reference.md"
    }

    /// Skipped entirely when no struct carries the zero-copy marker.
    fn render(&self, catalog: &Catalog) -> Option<String> {
        let structs = catalog.zero_copy_structs();
        if structs.is_empty() {
            return None;
        }

        let mut output = String::new();
        output.push_str("# Zero-Copy Structures Reference\n\n");
        output.push_str(
            "This document provides detailed reference information for all zero-copy structures in the protocol.\n\n",
        );
        output.push_str("## Overview\n\n");
        output.push_str(&format!("Total zero-copy structures: **{}**\n", structs.len()));

        for s in structs {
            output.push('\n');
            output.push_str(&render_struct(s));
        }

        Some(output)
    }
}
