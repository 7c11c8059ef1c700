//! Comment decoration stripping.
//!
//! Turns a raw block comment (`/* ... */`, `/** ... */`, with or without the
//! delimiters) into clean text lines.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*/\*+(.*?)\*+/\s*$").unwrap());

static RE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*+").unwrap());

static RE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+/\s*$").unwrap());

/// Normalize a raw comment block into trimmed lines.
///
/// Each line loses its leading `*` and one space after it. Blank lines inside
/// the block are kept as empty strings; blank lines at either edge (the
/// delimiter lines) are dropped, so an empty block yields no lines at all.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    let body = strip_delimiters(raw);
    let mut lines: Vec<String> = body.lines().map(strip_decoration).collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let first = lines
        .iter()
        .position(|l| !l.is_empty())
        .unwrap_or(lines.len());
    lines.drain(..first);
    lines
}

/// Remove the `/*` and `*/` delimiters. Unterminated or opener-less blocks
/// lose whichever delimiter they do have.
fn strip_delimiters(raw: &str) -> String {
    if let Some(caps) = RE_BLOCK.captures(raw) {
        return caps[1].to_string();
    }
    let body = RE_OPEN.replace(raw, "");
    RE_CLOSE.replace(&body, "").into_owned()
}

/// Strip one leading `*` (and a single space after it) from a trimmed line.
fn strip_decoration(line: &str) -> String {
    let line = line.trim();
    let line = match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    };
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_star_decoration() {
        let raw = "/*\n * Creates a user\n *\n * @param {string} name Name\n */";
        assert_eq!(
            normalize_lines(raw),
            vec!["Creates a user", "", "@param {string} name Name"]
        );
    }

    #[test]
    fn strips_jsdoc_opener() {
        let raw = "/**\n * Creates a user\n */";
        assert_eq!(normalize_lines(raw), vec!["Creates a user"]);
    }

    #[test]
    fn keeps_undecorated_lines() {
        let raw = "/*\n          Creates a user\n         */";
        assert_eq!(normalize_lines(raw), vec!["Creates a user"]);
    }

    #[test]
    fn single_line_block() {
        assert_eq!(normalize_lines("/** action: Run it */"), vec!["action: Run it"]);
    }

    #[test]
    fn delimiters_optional() {
        assert_eq!(
            normalize_lines(" * first\n * second"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn empty_block_yields_nothing() {
        assert!(normalize_lines("/*\n *\n */").is_empty());
        assert!(normalize_lines("/**/").is_empty());
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn unterminated_block() {
        assert_eq!(normalize_lines("/*\n * dangling"), vec!["dangling"]);
    }

    #[test]
    fn only_one_star_removed() {
        assert_eq!(normalize_lines("/*\n * **bold** text\n */"), vec!["**bold** text"]);
    }
}
