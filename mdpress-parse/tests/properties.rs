//! Property-based tests using proptest.
//!
//! These verify that the pipeline never panics on arbitrary input, that
//! well-formed delimiter splits preserve content, and that rendering has no
//! hidden mutation.

use mdpress_parse::{parse_document, Node};
use proptest::prelude::*;

proptest! {
    /// Any random printable string fed to the parser either produces a tree
    /// or a typed error, but never panics. Rendering the tree (which may
    /// legitimately fail on an empty document) must not panic either.
    #[test]
    fn any_markdown_no_panic(input in "\\PC{0,500}") {
        if let Ok(doc) = parse_document(&input) {
            let _ = doc.render();
        }
    }

    /// For well-formed bold/italic/code spans, concatenating the content of
    /// every span in tokenizer output order reconstructs the input with the
    /// delimiter characters removed.
    #[test]
    fn delimiter_split_roundtrips(
        lead in "[a-z ]{1,20}",
        bold in "[a-z]{1,10}",
        mid in "[a-z ]{1,20}",
        italic in "[a-z]{1,10}",
        code in "[a-z ]{1,10}",
    ) {
        let input = format!("{lead}**{bold}**{mid}*{italic}* `{code}`");
        let spans = mdpress_parse::inline::text_to_spans(&input);
        let rejoined: String = spans.iter().map(|s| s.content.as_str()).collect();
        let stripped = input.replace('*', "").replace('`', "");
        prop_assert_eq!(rejoined, stripped);
    }

    /// Rendering a node twice yields identical strings.
    #[test]
    fn render_is_idempotent(text in "[A-Za-z0-9 .,!?]{1,80}") {
        let input = format!("# Title\n\n{text}\n");
        let doc = parse_document(&input).unwrap();
        let first = doc.render().unwrap();
        let second = doc.render().unwrap();
        prop_assert_eq!(first, second);
    }

    /// A paragraph of plain words renders with its text intact inside the
    /// root container.
    #[test]
    fn plain_paragraph_preserved(body in "[A-Za-z][A-Za-z0-9 .,]{0,60}[A-Za-z]") {
        let doc = parse_document(&body).unwrap();
        let html = doc.render().unwrap();
        prop_assert_eq!(html, format!("<div><p>{}</p></div>", body.trim()));
    }
}

#[test]
fn classifier_fires_exactly_once() {
    // Mutual exclusion is structural (first match wins), but spot-check a
    // spread of blocks through the public classifier.
    use mdpress_parse::blocks::classify_block;
    use mdpress_parse::BlockType;

    let cases = [
        "# heading",
        "```\ncode\n```",
        "> quote",
        "* item",
        "1. item",
        "paragraph",
        "*emphasis only*",
        "2. not a list",
    ];
    for block in cases {
        // classify_block is total over trimmed non-empty blocks.
        let _ty: BlockType = classify_block(block);
    }
}

#[test]
fn trees_are_exclusively_owned() {
    // Cloning and rendering a subtree does not affect the original.
    let doc = parse_document("# T\n\nbody").unwrap();
    let copy: Node = doc.clone();
    assert_eq!(doc.render().unwrap(), copy.render().unwrap());
}
