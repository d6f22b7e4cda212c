//! `auto-generated-index.md` — statistics and links.

use crate::model::Catalog;
use crate::render::Renderer;

const GENERATED_FILES: &[(&str, &str)] = &[
    ("Zero-Copy Structures Reference", "zero-copy-reference.md"),
    ("API Structures Reference", "api-structures.md"),
    ("Function Reference", "function-reference.md"),
];

/// Hand-written pages maintained next to the generated ones.
const MANUAL_PAGES: &[(&str, &str)] = &[
    ("Zero-Copy Architecture Guide", "zero-copy-architecture.md"),
    ("Performance Optimization Guide", "performance-optimization.md"),
    ("API Reference", "api-reference.md"),
    ("User Tutorials", "user-tutorials.md"),
    ("Developer Guide", "developer-guide.md"),
];

pub struct IndexRenderer {
    generated_at: String,
}

impl IndexRenderer {
    pub fn new(generated_at: &str) -> Self {
        Self {
            generated_at: generated_at.to_string(),
        }
    }
}

impl Renderer for IndexRenderer {
    fn file_name(&self) -> &str {
        "auto-generated-index.md"
    }

    fn render(&self, catalog: &Catalog) -> Option<String> {
        let mut output = String::new();
        output.push_str("# Auto-Generated Documentation Index\n\n");
        output.push_str("This index is automatically generated from the Rust source code.\n\n");
        output.push_str(&format!("Last updated: {}\n\n", self.generated_at));

        output.push_str("## Statistics\n\n");
        output.push_str(&format!("- **Structures documented**: {}\n", catalog.structs.len()));
        output.push_str(&format!(
            "- **Functions documented**: {}\n",
            catalog.public_functions().len()
        ));
        output.push_str(&format!(
            "- **Zero-copy structures**: {}\n",
            catalog.zero_copy_structs().len()
        ));

        output.push_str("\n## Generated Files\n\n");
        push_links(&mut output, GENERATED_FILES);

        output.push_str("\n## Manual Documentation\n\n");
        push_links(&mut output, MANUAL_PAGES);

        Some(output)
    }
}

fn push_links(output: &mut String, links: &[(&str, &str)]) {
    for (title, target) in links {
        output.push_str(&format!("- [{}]({})\n", title, target));
    }
}
