/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Numbered citations with back-links and a generated reference list.
//!
//! Citation nodes in a [`Document`](notecite_ast::Document) are rewritten into
//! bracketed, clickable numbers (`[1]`), each carrying its own anchor so the
//! reference list can link back to every place a source was cited.
//!
//! # Pipeline
//!
//! ```text
//!  document ──► registry + rewriter ──► style adapter ──► reference renderer ──► section builder
//!               (number keys, rewrite    (format entries    (anchors, URL links,   (optional
//!                cites in place)          in first-cited     back-references)       "References"
//!                                         order)                                    heading + list)
//! ```
//!
//! The registry is rebuilt for every document so numbering only depends on
//! the order of citations in that document.

pub mod adapter;
pub mod anchor;
pub mod diagnostic;
pub mod error;
pub mod filter;
pub mod options;
pub mod registry;
pub mod render;
pub mod rewriter;
pub mod section;

pub use adapter::StyleAdapter;
pub use diagnostic::{DiagnosticKind, DiagnosticMessage};
pub use error::{Error, Result};
pub use filter::{FilterOutput, apply_bibliography_filter, extract_citations};
pub use options::{BibliographyFormat, BibliographyOptions};
pub use registry::CitationRegistry;
