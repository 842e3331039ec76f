//! `mdpress-parse` — parser for the mdpress markdown dialect.
//!
//! Turns a constrained markdown dialect into a tree of renderable HTML nodes:
//! source text is split into blank-line-delimited blocks, each block is
//! classified (heading, code, quote, list, paragraph) and translated into a
//! [`Node`] subtree, with inline content tokenized into bold/italic/code/
//! link/image spans along the way. The whole pipeline is a pure function of
//! the input string, so independent documents can be parsed from any number
//! of threads without coordination.
//!
//! # Quick start
//!
//! ```
//! let doc = mdpress_parse::parse_document("# Hello\n\nSome **bold** text.").unwrap();
//! let html = doc.render().unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text.</p></div>");
//! ```

pub mod blocks;
pub mod error;
pub mod inline;
pub mod parse;
pub mod render_html;
pub mod types;

pub use error::{ParseError, RenderError};
pub use parse::{extract_title, parse_document};
pub use types::{Attrs, BlockType, Node, SpanKind, TextSpan};

impl Node {
    /// Render this node and its subtree to an HTML string.
    pub fn render(&self) -> Result<String, RenderError> {
        render_html::render_node(self)
    }
}
