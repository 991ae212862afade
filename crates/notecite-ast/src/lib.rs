/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for notecite.
 *
 * This crate provides pure data type definitions for the parsed document
 * tree that the citation pipeline rewrites. It has minimal dependencies
 * (serde, hashlink) and knows nothing about bibliographies or styles.
 */

pub mod block;
pub mod document;
pub mod inline;
pub mod meta;
pub mod walk;

// Re-export commonly used types at the crate root
pub use block::{Block, Blocks, header, ordered_list};
pub use document::Document;
pub use inline::{
    Citation, CitationMode, Cite, Inline, Inlines, inlines_to_text, raw_html_inline, text_inlines,
};
pub use meta::{Meta, MetaValue};
pub use walk::{walk_inlines, walk_inlines_mut};
