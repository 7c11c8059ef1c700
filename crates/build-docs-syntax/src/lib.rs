//! build-docs annotation parsing library.
//!
//! Extracts documentation records from JSDoc-style block comments:
//!
//! ```text
//! /*
//!  * action: Creates a user in the database
//!  *
//!  * @param {Object} address Address of the user
//!  * @param {string} address.street Street of the user
//!  * @throws {ValidationError} If the address is invalid
//!  */
//! ```
//!
//! Every block produces exactly one [`DocumentationRecord`]. Malformed
//! annotation lines are skipped; nothing here returns an error.

pub mod annotation;
pub mod block;
pub mod model;
pub mod normalize;
pub mod scan;
pub mod tree;

pub use model::{DocumentationRecord, ParamNode, ParamType, ThrowsDescriptor};

use annotation::Annotation;
use tree::ParamTreeBuilder;

/// Parse every block comment found in `source`, in source order.
pub fn parse_source(source: &str) -> Vec<DocumentationRecord> {
    parse_comments(scan::block_comments(source))
}

/// Parse pre-extracted raw comment blocks, one record per block.
pub fn parse_comments<I, S>(blocks: I) -> Vec<DocumentationRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .map(|block| parse_comment(block.as_ref()))
        .collect()
}

/// Parse a single raw comment block (delimiters optional).
pub fn parse_comment(raw: &str) -> DocumentationRecord {
    let lines = normalize::normalize_lines(raw);
    let parts = block::split(&lines);

    let mut name_tag: Option<String> = None;
    let mut throws: Option<ThrowsDescriptor> = None;
    let mut params = ParamTreeBuilder::new();

    for line in &parts.annotations {
        match annotation::parse_annotation(line) {
            Some(Annotation::Name(name)) => {
                if name_tag.is_none() {
                    name_tag = Some(name);
                }
            }
            Some(Annotation::Param(param)) => params.push(&param),
            Some(Annotation::Throws(descriptor)) => {
                if throws.is_none() {
                    throws = Some(descriptor);
                } else {
                    tracing::debug!(line = %line, "ignoring repeated @throws");
                }
            }
            Some(Annotation::Other(tag)) => {
                tracing::trace!(tag = %tag, "ignoring unsupported annotation");
            }
            None => {
                tracing::debug!(line = %line, "skipping malformed annotation");
            }
        }
    }

    let heading = block::resolve_heading(parts.free_text, name_tag);
    let record = DocumentationRecord {
        name: heading.name,
        description: heading.description,
        params: params.finish(),
        throws,
    };
    tracing::trace!(
        name = %record.name,
        params = record.params.len(),
        "parsed comment block"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_gives_empty_record() {
        assert_eq!(parse_comment("/* */"), DocumentationRecord::default());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let record = parse_comment(
            "/*\n * Desc\n * @param {string}\n * @param {number} age Age\n * @throws\n */",
        );
        assert_eq!(record.params.len(), 1);
        assert_eq!(record.params[0].title, "age");
        assert!(record.throws.is_none());
    }

    #[test]
    fn first_throws_wins() {
        let record = parse_comment("/*\n * @throws {A} first\n * @throws {B} second\n */");
        assert_eq!(record.throws.unwrap().ty.as_deref(), Some("A"));
    }

    #[test]
    fn repeated_throws_leaves_first_untouched() {
        let record = parse_comment(
            "/*
 * @throws
 * @throws Bad input
 * @throws {B} second
 * @throws {C}
 */",
        );
        let throws = record.throws.unwrap();
        assert_eq!(throws.ty, None);
        assert_eq!(throws.description.as_deref(), Some("Bad input"));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let record = parse_comment("/*\n * Desc\n * @returns {string} Id\n *   more\n */");
        assert_eq!(record.description, "Desc");
        assert!(record.params.is_empty());
    }

    #[test]
    fn parse_comments_keeps_order() {
        let records = parse_comments(["/* a: first */", "/* b: second */"]);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
