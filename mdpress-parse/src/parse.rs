//! Document-level parsing.
//!
//! Splits source markdown into blank-line-delimited blocks and assembles the
//! translated blocks under a single root container.

use crate::blocks::block_to_node;
use crate::error::ParseError;
use crate::types::Node;

/// Split markdown into trimmed, non-empty blocks on blank-line boundaries.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse a whole markdown document into its root node.
///
/// Blocks are classified and translated in source order and collected under a
/// root `div` container. The first translation error aborts the document;
/// there is no partial output.
pub fn parse_document(markdown: &str) -> Result<Node, ParseError> {
    let normalised = markdown.replace("\r\n", "\n");

    let mut children = Vec::new();
    for block in split_blocks(&normalised) {
        children.push(block_to_node(block)?);
    }

    Ok(Node::container("div", children))
}

/// Extract the document title: the text of the first line starting with a
/// single `#` followed by whitespace.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    for line in markdown.lines() {
        if let Some(rest) = line.strip_prefix('#') {
            if rest.starts_with(|c: char| c.is_whitespace()) {
                return Ok(rest.trim_start().to_string());
            }
        }
    }
    Err(ParseError::NoTitleFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_drops_empty_blocks() {
        let blocks = split_blocks("# Title\n\n\n\n   \n\nBody text.\n");
        assert_eq!(blocks, vec!["# Title", "Body text."]);
    }

    #[test]
    fn parse_document_wraps_in_div() {
        let doc = parse_document("# Hello\n\nA paragraph.").unwrap();
        assert_eq!(
            doc.render().unwrap(),
            "<div><h1>Hello</h1><p>A paragraph.</p></div>"
        );
    }

    #[test]
    fn parse_document_preserves_block_order() {
        let doc = parse_document("first\n\n> second\n\n* third").unwrap();
        assert_eq!(
            doc.render().unwrap(),
            "<div><p>first</p><blockquote>second</blockquote><ul><li>third</li></ul></div>"
        );
    }

    #[test]
    fn parse_document_normalises_crlf() {
        let doc = parse_document("# A\r\n\r\nB").unwrap();
        assert_eq!(doc.render().unwrap(), "<div><h1>A</h1><p>B</p></div>");
    }

    #[test]
    fn empty_document_renders_as_error() {
        // The root container has no children, which is a render-time error.
        let doc = parse_document("").unwrap();
        assert!(doc.render().is_err());
    }

    #[test]
    fn extract_title_from_first_h1() {
        let title = extract_title("# My Site\n\nIntro.").unwrap();
        assert_eq!(title, "My Site");
    }

    #[test]
    fn extract_title_skips_deeper_headings() {
        let title = extract_title("## Not it\n\n# The Title").unwrap();
        assert_eq!(title, "The Title");
    }

    #[test]
    fn extract_title_missing_is_error() {
        let err = extract_title("just a paragraph").unwrap_err();
        assert_eq!(err, ParseError::NoTitleFound);
    }
}
