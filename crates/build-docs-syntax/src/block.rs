//! Block splitting and name/description resolution.

use regex::Regex;
use std::sync::LazyLock;

// `action: description` shorthand on the first free-text line
static RE_ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$-]*):(?:\s+(.*))?$").unwrap());

/// A normalized comment block split at its first `@` line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Block<'a> {
    /// Lines before the first annotation (blank lines kept)
    pub free_text: &'a [String],
    /// Logical annotation lines, continuation lines already folded in
    pub annotations: Vec<String>,
}

/// Resolved record heading.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Heading {
    pub name: String,
    pub description: String,
}

/// Split normalized lines into free text and annotations.
///
/// A non-empty line in the annotation span that does not start with `@`
/// continues the previous annotation and is joined with a single space.
pub fn split(lines: &[String]) -> Block<'_> {
    let start = lines
        .iter()
        .position(|l| l.starts_with('@'))
        .unwrap_or(lines.len());

    let mut annotations: Vec<String> = Vec::new();
    for line in &lines[start..] {
        if line.is_empty() {
            continue;
        }
        match annotations.last_mut() {
            Some(last) if !line.starts_with('@') => {
                last.push(' ');
                last.push_str(line);
            }
            _ => annotations.push(line.clone()),
        }
    }

    Block {
        free_text: &lines[..start],
        annotations,
    }
}

/// Derive name and description.
///
/// An `action:` prefix on the first free-text line wins over `@name`;
/// otherwise `name_tag` (the first `@name` value) is used, else "".
pub fn resolve_heading(free_text: &[String], name_tag: Option<String>) -> Heading {
    let mut lines: Vec<&str> = free_text.iter().map(String::as_str).collect();

    if let Some(first) = lines.first().copied() {
        if let Some(caps) = RE_ACTION.captures(first) {
            let name = caps[1].to_string();
            lines[0] = caps.get(2).map_or("", |m| m.as_str());
            return Heading {
                name,
                description: join_description(&lines),
            };
        }
    }

    Heading {
        name: name_tag.unwrap_or_default(),
        description: join_description(&lines),
    }
}

/// Join free text: lines within a paragraph with a single space,
/// paragraphs (separated by blank lines) with an empty line.
pub fn join_description(lines: &[&str]) -> String {
    let paragraphs: Vec<String> = lines
        .split(|l| l.trim().is_empty())
        .filter(|p| !p.is_empty())
        .map(|p| p.iter().map(|l| l.trim()).collect::<Vec<_>>().join(" "))
        .collect();
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_at_first_annotation() {
        let input = lines(&["Creates a user", "", "@param {string} name Name", "@throws Oops"]);
        let block = split(&input);
        assert_eq!(block.free_text, &input[..2]);
        assert_eq!(
            block.annotations,
            vec!["@param {string} name Name", "@throws Oops"]
        );
    }

    #[test]
    fn split_without_annotations() {
        let input = lines(&["Creates a user"]);
        let block = split(&input);
        assert_eq!(block.free_text.len(), 1);
        assert!(block.annotations.is_empty());
    }

    #[test]
    fn continuation_lines_fold_into_previous() {
        let input = lines(&["@param {string} name Name of", "the user", "", "@throws Oops"]);
        let block = split(&input);
        assert_eq!(
            block.annotations,
            vec!["@param {string} name Name of the user", "@throws Oops"]
        );
    }

    #[test]
    fn action_prefix_sets_name() {
        let input = lines(&["action: Creates a user"]);
        let heading = resolve_heading(&input, None);
        assert_eq!(heading.name, "action");
        assert_eq!(heading.description, "Creates a user");
    }

    #[test]
    fn action_prefix_beats_name_tag() {
        let input = lines(&["action: Description"]);
        let heading = resolve_heading(&input, Some("action1".to_string()));
        assert_eq!(heading.name, "action");
    }

    #[test]
    fn name_tag_used_without_prefix() {
        let input = lines(&["Description"]);
        let heading = resolve_heading(&input, Some("action".to_string()));
        assert_eq!(heading.name, "action");
        assert_eq!(heading.description, "Description");
    }

    #[test]
    fn no_name_source() {
        let input = lines(&["Description"]);
        assert_eq!(resolve_heading(&input, None).name, "");
    }

    #[test]
    fn colon_without_space_is_not_a_prefix() {
        let input = lines(&["See http://example.com"]);
        let heading = resolve_heading(&input, None);
        assert_eq!(heading.name, "");
        assert_eq!(heading.description, "See http://example.com");

        let input = lines(&["http://example.com"]);
        assert_eq!(resolve_heading(&input, None).name, "");
    }

    #[test]
    fn multi_line_description() {
        let input = lines(&["Creates a user", "in the database", "", "Second paragraph"]);
        let heading = resolve_heading(&input, None);
        assert_eq!(
            heading.description,
            "Creates a user in the database\n\nSecond paragraph"
        );
    }

    #[test]
    fn empty_free_text() {
        let heading = resolve_heading(&[], Some("action".to_string()));
        assert_eq!(heading.name, "action");
        assert_eq!(heading.description, "");
    }
}
