/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Bibliography data and citation style processing for notecite.
//!
//! This crate provides:
//! - [`Reference`]s in CSL-JSON format and a keyed [`Bibliography`] of them
//! - The [`StyleProcessor`] capability: format references into bibliography
//!   entry strings, one per reference, in the order given
//! - [`CslProcessor`], the built-in processor for the fixed
//!   [`BuiltinStyle::ChicagoFullNoteBibliography`] style and the static
//!   English [`Locale`]
//!
//! # Example
//!
//! ```rust,ignore
//! use notecite_csl::{Bibliography, CslProcessor, StyleProcessor};
//!
//! let bibliography = Bibliography::from_json_str(csl_json)?;
//! let processor = CslProcessor::default();
//! let refs: Vec<_> = bibliography.iter().cloned().collect();
//! let entries = processor.make_bibliography(&refs)?;
//! ```

pub mod error;
pub mod locale;
pub mod processor;
pub mod reference;
pub mod style;

// Re-export main types
pub use error::{Error, Result};
pub use locale::Locale;
pub use processor::{CslProcessor, StyleProcessor};
pub use reference::{Bibliography, DateVariable, Name, Reference, StringOrNumber};
pub use style::{BuiltinStyle, escape_html};
