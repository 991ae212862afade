/*
 * section.rs
 * Copyright (c) 2025 Posit, PBC
 */

use notecite_ast::{Blocks, header, ordered_list, raw_html_inline};

pub const REFERENCES_HEADING: &str = "References";

/// Append a level-2 "References" heading and an ordered list with one raw
/// HTML item per rendered reference, in the given order.
///
/// Nothing is appended when there are no references.
pub fn append_bibliography_section<S: AsRef<str>>(blocks: &mut Blocks, references: &[S]) {
    if references.is_empty() {
        return;
    }
    blocks.push(header(2, REFERENCES_HEADING));
    blocks.push(ordered_list(
        references
            .iter()
            .map(|reference| vec![raw_html_inline(reference.as_ref())]),
    ));
}
