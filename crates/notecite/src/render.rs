/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Turns formatted bibliography entries into linked HTML fragments.
 */

use crate::anchor::{entry_anchor, occurrence_anchor};
use once_cell::sync::Lazy;
use regex::Regex;

/// A bare http(s) URL followed by a period; the period stays outside the link.
///
/// Entries arrive HTML-escaped, so `;` is allowed in the path to keep
/// entities such as `&amp;` inside the link. Any other character outside
/// the path class (`,`, whitespace) ends the URL, and the link then stops
/// at the last period before it.
static URL_BEFORE_PERIOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=;]*))\.",
    )
    .expect("URL pattern is valid")
});

const BACK_REFERENCE_GLYPH: &str = "↩️";

/// Render formatted entries, in order. `occurrence_counts[i]` is how many
/// times entry `i` was cited; entries without a count get one back-reference.
pub fn render_references<S: AsRef<str>>(formatted: &[S], occurrence_counts: &[usize]) -> Vec<String> {
    formatted
        .iter()
        .enumerate()
        .map(|(i, reference)| {
            let count = occurrence_counts.get(i).copied().unwrap_or(1);
            reference_html(&linkify_first_url(reference.as_ref()), i + 1, count)
        })
        .collect()
}

/// Wrap an entry in its anchor and append one back-reference per occurrence.
///
/// The first back-reference is the bare glyph; later ones carry their
/// occurrence number as a superscript.
pub fn reference_html(reference: &str, index: usize, back_refs: usize) -> String {
    let links: Vec<String> = (1..=back_refs)
        .map(|occurrence| {
            let label = if occurrence > 1 {
                format!("{}<sup>{}</sup>", BACK_REFERENCE_GLYPH, occurrence)
            } else {
                BACK_REFERENCE_GLYPH.to_string()
            };
            format!(
                "<a href=\"#{}\">{}</a>",
                occurrence_anchor(index, occurrence),
                label
            )
        })
        .collect();

    let mut html = format!("<span id=\"{}\">{}", entry_anchor(index), reference);
    if !links.is_empty() {
        html.push(' ');
        html.push_str(&links.join("; "));
    }
    html.push_str("</span>");
    html
}

/// Link the first bare URL that is followed by a period.
pub fn linkify_first_url(text: &str) -> String {
    URL_BEFORE_PERIOD
        .replace(text, "<a href=\"$1\">$1</a>.")
        .into_owned()
}
