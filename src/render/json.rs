//! JSON renderer — the raw catalog for tooling integration.
//!
//! Unlike the markdown artifacts this includes private functions.

use crate::model::{Catalog, FunctionDoc, StructDoc};
use crate::render::Renderer;
use serde::Serialize;
use tracing::warn;

pub struct JsonRenderer {
    generated_at: String,
}

impl JsonRenderer {
    pub fn new(generated_at: &str) -> Self {
        Self {
            generated_at: generated_at.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonCatalog<'a> {
    generated_at: &'a str,
    structs: &'a [StructDoc],
    functions: &'a [FunctionDoc],
}

impl Renderer for JsonRenderer {
    fn file_name(&self) -> &str {
        "declarations.json"
    }

    fn render(&self, catalog: &Catalog) -> Option<String> {
        let doc = JsonCatalog {
            generated_at: &self.generated_at,
            structs: catalog.structs,
            functions: catalog.functions,
        };
        match serde_json::to_string_pretty(&doc) {
            Ok(mut out) => {
                out.push('\n');
                Some(out)
            }
            Err(e) => {
                warn!("failed to serialize declarations: {}", e);
                None
            }
        }
    }
}
