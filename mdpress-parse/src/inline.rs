//! Inline tokenizer.
//!
//! Splits a flat text string (no block markers) into typed [`TextSpan`]s via
//! sequential passes. Each pass re-tokenizes only the `Plain` spans produced
//! by the previous pass; already-typed spans flow through untouched. Pass
//! order is load-bearing: `**` must be consumed before `*` so the italic pass
//! cannot misfire on bold delimiters, and images must be matched before links
//! because the link pattern also matches inside `![...](...)`.

use crate::types::{SpanKind, TextSpan};

/// Tokenize `text` into an ordered sequence of spans.
///
/// Tokenization cannot fail: unmatched delimiters are left in place as
/// ordinary text. Empty segments produced by a split are dropped, never
/// emitted as empty `Plain` spans.
pub fn text_to_spans(text: &str) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in [
        ("**", SpanKind::Bold),
        ("*", SpanKind::Italic),
        ("`", SpanKind::Code),
    ] {
        spans = split_spans_delimiter(spans, delimiter, kind);
    }
    spans = split_spans_image(spans);
    split_spans_link(spans)
}

/// One delimiter pass: split every `Plain` span on `delimiter`.
///
/// Odd-indexed split segments (the text between a delimiter pair) become
/// spans of `kind`; even-indexed segments stay `Plain`. A lone unmatched
/// delimiter still alternates the segments around it, so `a*b` yields
/// `Plain("a"), Italic("b")` on the single-`*` pass, matching the split
/// semantics of the format.
pub fn split_spans_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }
        for (i, part) in span.content.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::plain(part));
            } else {
                result.push(TextSpan::styled(part, kind));
            }
        }
    }
    result
}

/// Image pass: split every `Plain` span on `![alt](url)` units.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_bracketed(spans, true)
}

/// Link pass: split every `Plain` span on `[text](url)` units.
///
/// Must run after [`split_spans_image`] so the leading `!` of an image has
/// already been consumed and cannot be re-matched as link text.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_bracketed(spans, false)
}

fn split_spans_bracketed(spans: Vec<TextSpan>, image: bool) -> Vec<TextSpan> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }

        let mut rest = span.content.as_str();
        while let Some(m) = find_bracketed(rest, image) {
            if !rest[..m.start].is_empty() {
                result.push(TextSpan::plain(&rest[..m.start]));
            }
            if image {
                result.push(TextSpan::image(m.label, m.url));
            } else {
                result.push(TextSpan::link(m.label, m.url));
            }
            rest = &rest[m.end..];
        }
        if !rest.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }
    result
}

/// A matched `[label](url)` unit within a larger string.
struct Bracketed<'a> {
    /// Byte offset of the opening `[` (or the `!` for images).
    start: usize,
    /// Byte offset just past the closing `)`.
    end: usize,
    label: &'a str,
    url: &'a str,
}

/// Find the first `[label](url)` (or `![label](url)` when `image` is set) in
/// `text`.
///
/// Matching is non-greedy: the label runs to the first `](` after the opener
/// and the url to the first `)` after that. A candidate opener with no
/// completing `](`...`)` is skipped and the scan resumes past it.
fn find_bracketed(text: &str, image: bool) -> Option<Bracketed<'_>> {
    let opener = if image { "![" } else { "[" };
    let mut from = 0;

    while let Some(rel) = text[from..].find(opener) {
        let start = from + rel;
        let label_start = start + opener.len();
        let after_opener = &text[label_start..];

        if let Some(label_end) = after_opener.find("](") {
            let url_part = &after_opener[label_end + 2..];
            if let Some(url_end) = url_part.find(')') {
                return Some(Bracketed {
                    start,
                    end: label_start + label_end + 2 + url_end + 1,
                    label: &after_opener[..label_end],
                    url: &url_part[..url_end],
                });
            }
        }

        from = label_start;
    }
    None
}
