//! Block classification and block-to-node translation.
//!
//! [`classify_block`] labels one trimmed, non-empty block with its
//! [`BlockType`]; [`block_to_node`] then builds the corresponding [`Node`]
//! subtree, invoking the inline tokenizer on textual content.

use crate::error::ParseError;
use crate::inline::text_to_spans;
use crate::types::{BlockType, Node};

/// Classify one block. Rules are evaluated in priority order; the first match
/// wins, so exactly one type applies to any block.
///
/// The unordered-list rule requires the space after the marker (`* `, `- `,
/// `+ `): a line like `*text` is not a list item, which keeps emphasis-only
/// blocks out of the list branch.
pub fn classify_block(block: &str) -> BlockType {
    let level = block.chars().take_while(|&c| c == '#').count();
    if level > 0 && block[level..].starts_with(|c: char| c.is_whitespace()) {
        return BlockType::Heading(level);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if block.lines().all(is_unordered_item) {
        return BlockType::UnorderedList;
    }

    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn is_unordered_item(line: &str) -> bool {
    matches!(line.as_bytes(), [b'*' | b'-' | b'+', b' ', ..])
}

/// Translate one classified block into its node subtree.
pub fn block_to_node(block: &str) -> Result<Node, ParseError> {
    match classify_block(block) {
        BlockType::Paragraph => Ok(paragraph_node(block)),
        BlockType::Heading(level) => heading_node(block, level),
        BlockType::Code => Ok(code_node(block)),
        BlockType::OrderedList => Ok(list_node(block, "ol", 3)),
        BlockType::UnorderedList => Ok(list_node(block, "ul", 2)),
        BlockType::Quote => quote_node(block),
    }
}

/// Tokenize inline text and map each span to a leaf node.
fn text_to_children(text: &str) -> Vec<Node> {
    text_to_spans(text)
        .into_iter()
        .map(|span| span.into_node())
        .collect()
}

// ------------------------------------------------------------------
// Per-type translators
// ------------------------------------------------------------------

fn paragraph_node(block: &str) -> Node {
    let paragraph = block.lines().collect::<Vec<_>>().join(" ");
    Node::container("p", text_to_children(&paragraph))
}

fn heading_node(block: &str, level: usize) -> Result<Node, ParseError> {
    // Skip the `#` markers plus the one required separator character. A
    // heading marker with nothing after the separator is malformed. Counted
    // in characters, not bytes: the separator may be any whitespace.
    if level + 1 >= block.chars().count() {
        return Err(ParseError::InvalidHeading {
            block: block.to_string(),
        });
    }
    let text: String = block.chars().skip(level + 1).collect();
    Ok(Node::container(
        &format!("h{level}"),
        text_to_children(&text),
    ))
}

fn code_node(block: &str) -> Node {
    // Strip 4 leading characters (the fence plus the newline after it, or the
    // first character of a language tag) and the 3-character closing fence.
    // The closing fence is ASCII, so a byte index works on that end.
    let start = block
        .char_indices()
        .nth(4)
        .map(|(i, _)| i)
        .unwrap_or(block.len());
    let end = block.len() - 3;
    let text = if start < end { &block[start..end] } else { "" };
    let code = Node::container("code", text_to_children(text));
    Node::container("pre", vec![code])
}

fn list_node(block: &str, tag: &str, marker_width: usize) -> Node {
    let items = block
        .lines()
        .map(|line| {
            let text = line.get(marker_width..).unwrap_or_default();
            Node::container("li", text_to_children(text))
        })
        .collect();
    Node::container(tag, items)
}

fn quote_node(block: &str) -> Result<Node, ParseError> {
    let mut stripped = Vec::new();
    for line in block.lines() {
        // Recheck the prefix at translation time even though classification
        // already required it.
        if !line.starts_with('>') {
            return Err(ParseError::InvalidQuote {
                line: line.to_string(),
            });
        }
        stripped.push(line.trim_start_matches('>').trim());
    }
    let content = stripped.join(" ");
    Ok(Node::container("blockquote", text_to_children(&content)))
}
