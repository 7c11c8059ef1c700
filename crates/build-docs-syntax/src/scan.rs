//! Block comment scanner for JavaScript-like source text.
//!
//! Tracks string literals so a `/*` inside quotes does not open a comment.
//! `//` line comments are skipped entirely; a run of them is never treated as
//! a documentation block. Regex literals are not tokenized.

/// Return every `/* ... */` block comment in source order, delimiters included.
///
/// An unterminated block runs to the end of the input.
pub fn block_comments(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = source[i + 2..]
                    .find("*/")
                    .map_or(len, |pos| i + 2 + pos + 2);
                blocks.push(&source[i..end]);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = source[i..].find('\n').map_or(len, |pos| i + pos + 1);
            }
            quote @ (b'\'' | b'"' | b'`') => {
                i = skip_string(bytes, i + 1, quote);
            }
            _ => i += 1,
        }
    }

    blocks
}

/// Skip past a string literal opened just before `start`. Returns the index
/// after the closing quote. Plain quotes also end at a newline.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if quote != b'`' => return i + 1,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_in_order() {
        let src = "/* one */\nfunction a() {}\n/**\n * two\n */\nfunction b() {}\n";
        assert_eq!(block_comments(src), vec!["/* one */", "/**\n * two\n */"]);
    }

    #[test]
    fn skips_line_comments() {
        let src = "// not a block /* nope */\n/* yes */";
        assert_eq!(block_comments(src), vec!["/* yes */"]);
    }

    #[test]
    fn ignores_openers_in_strings() {
        let src = r#"const a = "/* no */"; const b = '/* no */'; const c = `/* no */`; /* yes */"#;
        assert_eq!(block_comments(src), vec!["/* yes */"]);
    }

    #[test]
    fn honours_escaped_quotes() {
        let src = r#"const a = "say \"/*\" ok"; /* yes */"#;
        assert_eq!(block_comments(src), vec!["/* yes */"]);
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        assert_eq!(block_comments("x; /* open"), vec!["/* open"]);
    }

    #[test]
    fn empty_block() {
        assert_eq!(block_comments("/**/"), vec!["/**/"]);
    }

    #[test]
    fn no_comments() {
        assert!(block_comments("const x = 1;").is_empty());
    }

    #[test]
    fn non_ascii_text() {
        let src = "const s = 'héllo'; /* café */";
        assert_eq!(block_comments(src), vec!["/* café */"]);
    }
}
