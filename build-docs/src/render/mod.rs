//! Output formats, selected by name.

pub mod json;
pub mod markdown;

use anyhow::{anyhow, Result};
use build_docs_syntax::DocumentationRecord;

/// Trait for rendering one source's records into a specific output format.
pub trait Renderer {
    fn render(&self, records: &[DocumentationRecord]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use json or markdown",
            format
        )),
    }
}
