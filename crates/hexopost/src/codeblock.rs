//! Code-block-aware text rewriting
//!
//! Splits a document into code and prose spans so that transforms can
//! be applied to prose only. Span kinds are tried at each candidate
//! position in a fixed priority order: tilde fence, backtick fence,
//! inline span. The spans partition the document in order, and their
//! concatenation reconstructs the input exactly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Code,
    Prose,
}

/// A contiguous slice of the document, tagged code or prose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

/// Find the end of the code span starting exactly at `pos`, if any.
///
/// An unterminated fence is not a code span. When inline spans are
/// enabled, an unterminated backtick fence still yields the empty
/// inline span formed by its first two backticks.
fn code_span_end(content: &str, pos: usize, include_inline: bool) -> Option<usize> {
    let rest = &content[pos..];

    if rest.starts_with("~~~") {
        if let Some(close) = rest[3..].find("~~~") {
            return Some(pos + 3 + close + 3);
        }
    }
    if rest.starts_with("```") {
        if let Some(close) = rest[3..].find("```") {
            return Some(pos + 3 + close + 3);
        }
    }
    if include_inline && rest.starts_with('`') {
        // closing backtick with no backtick in between
        if let Some(close) = rest[1..].find('`') {
            return Some(pos + 1 + close + 1);
        }
    }

    None
}

/// Partition a document into code and prose spans.
///
/// Matches are found left to right and never overlap. `include_inline`
/// controls whether single-backtick spans count as code; fence blocks
/// always do. An empty document yields a single empty prose span.
pub fn split_spans(content: &str, include_inline: bool) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let bytes = content.as_bytes();
    let mut prose_start = 0;
    let mut cursor = 0;

    while cursor < bytes.len() {
        if bytes[cursor] != b'`' && bytes[cursor] != b'~' {
            cursor += 1;
            continue;
        }
        match code_span_end(content, cursor, include_inline) {
            Some(end) => {
                if cursor > prose_start {
                    spans.push(Span { kind: SpanKind::Prose, text: &content[prose_start..cursor] });
                }
                spans.push(Span { kind: SpanKind::Code, text: &content[cursor..end] });
                prose_start = end;
                cursor = end;
            }
            None => cursor += 1,
        }
    }

    if prose_start < content.len() || spans.is_empty() {
        spans.push(Span { kind: SpanKind::Prose, text: &content[prose_start..] });
    }

    spans
}

/// Apply `transform` to every prose span, copying code spans verbatim.
///
/// The transform must tolerate being called on an empty string. With an
/// identity transform the output equals the input for any document.
pub fn rewrite_prose<F>(content: &str, include_inline: bool, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(content.len());
    for span in split_spans(content, include_inline) {
        match span.kind {
            SpanKind::Prose => out.push_str(&transform(span.text)),
            SpanKind::Code => out.push_str(span.text),
        }
    }
    out
}
