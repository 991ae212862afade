/*
 * rewriter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Rewrites Cite inlines into numbered, anchored markers.
 *
 * Each citation item becomes `[<a href="#ref-i"><span id="ref-i-n">i</span></a>]`
 * where `i` is the key's registry index and `n` counts the key's occurrences
 * so far. The Cite inline is then replaced by a raw HTML inline, so it is
 * never seen as a citation again.
 */

use crate::anchor::{entry_anchor, occurrence_anchor};
use crate::registry::CitationRegistry;
use notecite_ast::{Block, Citation, Cite, Inline, raw_html_inline, walk_inlines_mut};
use notecite_csl::escape_html;

/// Rewrite every citation under `blocks` in document order, registering each
/// cited key in `registry`.
pub fn rewrite_citations(blocks: &mut [Block], registry: &mut CitationRegistry) {
    walk_inlines_mut(blocks, &mut |inline| {
        if let Inline::Cite(cite) = inline {
            let html = render_cite(cite, registry);
            *inline = raw_html_inline(html);
        }
    });
}

/// The inline marker for one citation occurrence.
pub fn citation_marker(index: usize, occurrence: usize) -> String {
    format!(
        "[<a href=\"#{}\"><span id=\"{}\">{}</span></a>]",
        entry_anchor(index),
        occurrence_anchor(index, occurrence),
        index
    )
}

/// Render one Cite as HTML, registering its items.
///
/// Items are matched to their `@key` tokens in the surface text left to
/// right, each search starting after the previous match, so a key cited
/// twice in one marker maps each item to its own token. Text between
/// tokens (prefixes, suffixes, separators) is kept, HTML-escaped.
pub fn render_cite(cite: &Cite, registry: &mut CitationRegistry) -> String {
    let body = strip_brackets(&cite.text);
    let mut out = String::new();
    let mut cursor = 0;

    for citation in &cite.citations {
        let index = registry.register(&citation.id);
        let marker = citation_marker(index, registry.occurrences(&citation.id));

        match find_key_token(body, cursor, &citation.id) {
            Some((start, end)) => {
                let start = if citation.suppress_author() && body[cursor..start].ends_with('-') {
                    start - 1
                } else {
                    start
                };
                out.push_str(&escape_html(&body[cursor..start]));
                out.push_str(&marker);
                cursor = end;
            }
            None => {
                tracing::debug!(
                    key = %citation.id,
                    text = %cite.text,
                    "Citation key not found in marker text, rebuilding from prefix and suffix"
                );
                out.push_str(&escape_html(&body[cursor..]));
                cursor = body.len();
                if !out.is_empty() {
                    out.push_str("; ");
                }
                out.push_str(&decorated(citation, &marker));
            }
        }
    }

    out.push_str(&escape_html(&body[cursor..]));
    out
}

fn strip_brackets(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
}

fn decorated(citation: &Citation, marker: &str) -> String {
    let mut parts = Vec::new();
    if !citation.prefix.is_empty() {
        parts.push(escape_html(&citation.prefix));
    }
    parts.push(marker.to_string());
    let mut text = parts.join(" ");
    if !citation.suffix.is_empty() {
        let suffix = escape_html(&citation.suffix);
        if !suffix.starts_with(',') {
            text.push(' ');
        }
        text.push_str(&suffix);
    }
    text
}

/// Find `@key` or `@{key}` in `text` at or after byte offset `from`.
/// Returns the byte range of the whole token.
fn find_key_token(text: &str, from: usize, key: &str) -> Option<(usize, usize)> {
    let braced = format!("@{{{}}}", key);
    let plain = format!("@{}", key);

    let mut search = from;
    while search <= text.len() {
        let rest = &text[search..];
        let candidates = [
            rest.find(&braced).map(|i| (i, braced.len(), true)),
            rest.find(&plain).map(|i| (i, plain.len(), false)),
        ];
        let (offset, len, is_braced) = candidates.into_iter().flatten().min_by_key(|c| c.0)?;
        let start = search + offset;
        let end = start + len;
        if is_braced || is_token_end(&text[end..]) {
            return Some((start, end));
        }
        // A longer key that merely starts with this one; keep looking.
        search = start + 1;
    }
    None
}

/// Whether a key token may end right before `rest`.
///
/// Keys may contain internal punctuation (`doe:2020`, `a.b`), so punctuation
/// only ends a key when it is not followed by another key character.
fn is_token_end(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        None => true,
        Some(c) if is_key_char(c) => false,
        Some(c) if is_internal_punct(c) => !chars.next().is_some_and(is_key_char),
        Some(_) => true,
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_internal_punct(c: char) -> bool {
    matches!(
        c,
        ':' | '.' | '#' | '$' | '%' | '&' | '-' | '+' | '?' | '<' | '>' | '~' | '/'
    )
}
