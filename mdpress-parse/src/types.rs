use serde::{Deserialize, Serialize};

/// Inline emphasis/link/image kind of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// An atomic unit of inline content produced by the tokenizer.
///
/// `target` is the URL and is set iff `kind` is `Link` or `Image`. Spans are
/// created by [`crate::inline::text_to_spans`] and consumed immediately to
/// build [`Node`] leaves; they are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TextSpan {
    /// A plain text run.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    /// A span of the given non-link kind with no target.
    pub fn styled(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    /// A link span: `content` is the link text, `target` the URL.
    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(target.into()),
        }
    }

    /// An image span: `content` is the alt text, `target` the source URL.
    pub fn image(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Image,
            target: Some(target.into()),
        }
    }

    /// Convert this span into its HTML leaf node.
    ///
    /// Plain runs become untagged leaves that render verbatim. Link and image
    /// spans carry their URL as an `href`/`src` attribute; image leaves get
    /// empty text so the `<img>` element renders with no body.
    pub fn into_node(self) -> Node {
        match self.kind {
            SpanKind::Plain => Node::leaf(None, self.content),
            SpanKind::Bold => Node::leaf(Some("b"), self.content),
            SpanKind::Italic => Node::leaf(Some("i"), self.content),
            SpanKind::Code => Node::leaf(Some("code"), self.content),
            SpanKind::Link => Node::leaf_with_attrs(
                "a",
                self.content,
                vec![("href".to_string(), self.target.unwrap_or_default())],
            ),
            SpanKind::Image => Node::leaf_with_attrs(
                "img",
                "",
                vec![
                    ("src".to_string(), self.target.unwrap_or_default()),
                    ("alt".to_string(), self.content),
                ],
            ),
        }
    }
}

/// Insertion-ordered HTML attribute pairs.
///
/// Attribute order affects rendered output, so this is a sequence of pairs
/// rather than a map.
pub type Attrs = Vec<(String, String)>;

/// A renderable HTML tree node.
///
/// A `Leaf` with no tag renders its text verbatim (plain runs). A `Leaf` must
/// have text present to render; the empty string is valid (image leaves). A
/// `Container` must have a tag and at least one child to render. A container
/// exclusively owns its children: the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum Node {
    Leaf {
        tag: Option<String>,
        text: Option<String>,
        attrs: Attrs,
    },
    Container {
        tag: Option<String>,
        children: Vec<Node>,
        attrs: Attrs,
    },
}

impl Node {
    /// A leaf with no attributes.
    pub fn leaf(tag: Option<&str>, text: impl Into<String>) -> Self {
        Node::Leaf {
            tag: tag.map(str::to_string),
            text: Some(text.into()),
            attrs: Attrs::new(),
        }
    }

    /// A tagged leaf with attributes.
    pub fn leaf_with_attrs(tag: &str, text: impl Into<String>, attrs: Attrs) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            text: Some(text.into()),
            attrs,
        }
    }

    /// A container with no attributes.
    pub fn container(tag: &str, children: Vec<Node>) -> Self {
        Node::Container {
            tag: Some(tag.to_string()),
            children,
            attrs: Attrs::new(),
        }
    }
}

/// Classification of one blank-line-delimited markdown block.
///
/// Exactly one variant applies to any trimmed, non-empty block; the rules in
/// [`crate::blocks::classify_block`] are evaluated in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Level is the count of leading `#` characters; no upper bound is
    /// enforced, so `####### x` yields level 7.
    Heading(usize),
    Code,
    Quote,
    OrderedList,
    UnorderedList,
    Paragraph,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_span_to_untagged_leaf() {
        let node = TextSpan::plain("hello").into_node();
        assert_eq!(node, Node::leaf(None, "hello"));
    }

    #[test]
    fn link_span_carries_href() {
        let node = TextSpan::link("docs", "https://example.com").into_node();
        match node {
            Node::Leaf { tag, text, attrs } => {
                assert_eq!(tag.as_deref(), Some("a"));
                assert_eq!(text.as_deref(), Some("docs"));
                assert_eq!(attrs, vec![("href".to_string(), "https://example.com".to_string())]);
            }
            other => panic!("Expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn image_span_has_empty_text_and_src_then_alt() {
        let node = TextSpan::image("diagram", "arch.png").into_node();
        match node {
            Node::Leaf { tag, text, attrs } => {
                assert_eq!(tag.as_deref(), Some("img"));
                assert_eq!(text.as_deref(), Some(""));
                assert_eq!(
                    attrs,
                    vec![
                        ("src".to_string(), "arch.png".to_string()),
                        ("alt".to_string(), "diagram".to_string()),
                    ]
                );
            }
            other => panic!("Expected leaf, got {other:?}"),
        }
    }
}
