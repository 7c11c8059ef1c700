//! GitHub-flavored markdown renderer.
//!
//! One `###` section per record, with nested params as an indented list.

use crate::render::Renderer;
use anyhow::Result;
use build_docs_syntax::{DocumentationRecord, ParamNode, ThrowsDescriptor};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[DocumentationRecord]) -> Result<String> {
        let mut output = String::new();
        for record in records {
            output.push_str(&render_record(record));
            output.push('\n');
        }
        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_record(record: &DocumentationRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    let heading = if record.name.is_empty() {
        "(anonymous)"
    } else {
        record.name.as_str()
    };
    lines.push(format!("### {}\n", heading));

    if !record.description.is_empty() {
        lines.push(record.description.clone());
        lines.push(String::new());
    }

    if !record.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &record.params {
            render_param(&mut lines, &param.title, param, 0);
        }
        lines.push(String::new());
    }

    if let Some(ref throws) = record.throws {
        lines.push("#### Throws\n".to_string());
        lines.push(format!("* {}", render_throws(throws)));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `**title** (type): description`, children indented two spaces per level.
fn render_param(lines: &mut Vec<String>, label: &str, node: &ParamNode, depth: usize) {
    let mut entry = format!("{}* **{}** ({})", "  ".repeat(depth), label, node.ty);
    if !node.description.is_empty() {
        entry.push_str(": ");
        entry.push_str(&node.description);
    }
    lines.push(entry);

    if let Some(ref items) = node.items {
        render_param(lines, "[]", items, depth + 1);
    }
    for (key, child) in &node.properties {
        render_param(lines, key, child, depth + 1);
    }
}

fn render_throws(throws: &ThrowsDescriptor) -> String {
    match (&throws.ty, &throws.description) {
        (Some(ty), Some(desc)) => format!("**{}**: {}", ty, desc),
        (Some(ty), None) => format!("**{}**", ty),
        (None, Some(desc)) => desc.clone(),
        (None, None) => String::new(),
    }
}
