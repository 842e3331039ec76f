//! HTML string rendering for the node tree.
//!
//! Rendering is deliberately literal: attribute values and text content are
//! not escaped (this is not a security-hardened HTML generator), and leaves
//! always get a closing tag, so an image renders as `<img ...></img>` rather
//! than as a void element.

use crate::error::RenderError;
use crate::types::{Attrs, Node};

/// Render a node (and its subtree) to an HTML string.
///
/// Rendering is read-only: calling it twice on the same node yields identical
/// strings.
pub fn render_node(node: &Node) -> Result<String, RenderError> {
    match node {
        Node::Leaf { tag, text, attrs } => {
            let text = text.as_deref().ok_or(RenderError::MissingValue)?;
            match tag {
                None => Ok(text.to_string()),
                Some(tag) => Ok(format!("<{tag}{}>{text}</{tag}>", attrs_to_html(attrs))),
            }
        }
        Node::Container {
            tag,
            children,
            attrs,
        } => {
            let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
            if children.is_empty() {
                return Err(RenderError::EmptyChildren);
            }
            let mut html = format!("<{tag}{}>", attrs_to_html(attrs));
            for child in children {
                html.push_str(&render_node(child)?);
            }
            html.push_str(&format!("</{tag}>"));
            Ok(html)
        }
    }
}

/// Serialize attributes in insertion order as `key='value'` pairs, preceded
/// by a single space when the set is non-empty.
fn attrs_to_html(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{key}='{value}'"))
        .collect();
    format!(" {}", pairs.join(" "))
}
