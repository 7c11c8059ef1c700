//! JSON output: the record list as pretty-printed JSON.
//!
//! Serializes the record list directly; nested params keep the
//! `type`/`items`/`properties` shape that schema generators expect.

use crate::render::Renderer;
use anyhow::Result;
use build_docs_syntax::DocumentationRecord;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: &[DocumentationRecord]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(records)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
