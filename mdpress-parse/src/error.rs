/// Errors that can occur while translating markdown into the node tree.
///
/// Every error is fatal to the enclosing document: there is no partial
/// recovery or best-effort output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("heading marker with no body: '{block}'")]
    InvalidHeading { block: String },

    #[error("quote line missing '>' prefix: '{line}'")]
    InvalidQuote { line: String },

    #[error("no title found: document has no '# ' heading line")]
    NoTitleFound,
}

/// Errors that can occur while rendering a [`crate::Node`] to HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no text value")]
    MissingValue,

    #[error("container node has no tag")]
    MissingTag,

    #[error("container node has no children")]
    EmptyChildren,
}
