//! Renderer module — one trait object per generated artifact.

pub mod functions;
pub mod index;
pub mod json;
pub mod markdown;
pub mod structures;
pub mod zero_copy;

use crate::model::Catalog;

/// Renders one artifact from the extracted catalog.
pub trait Renderer {
    /// Name of the file written into the output directory.
    fn file_name(&self) -> &str;

    /// Full artifact text, or `None` when the artifact should not be written.
    fn render(&self, catalog: &Catalog) -> Option<String>;
}

/// The artifacts of a run, in generation order.
pub fn create_renderers(generated_at: &str, with_json: bool) -> Vec<Box<dyn Renderer>> {
    let mut renderers: Vec<Box<dyn Renderer>> = vec![
        Box::new(zero_copy::ZeroCopyRenderer),
        Box::new(structures::StructuresRenderer),
        Box::new(functions::FunctionsRenderer),
        Box::new(index::IndexRenderer::new(generated_at)),
    ];
    if with_json {
        renderers.push(Box::new(json::JsonRenderer::new(generated_at)));
    }
    renderers
}
