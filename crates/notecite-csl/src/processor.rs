/*
 * processor.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The style processor capability and its built-in implementation.

use crate::error::Result;
use crate::locale::Locale;
use crate::reference::Reference;
use crate::style::BuiltinStyle;

/// Formats bibliography entries for a fixed style and locale.
///
/// Implementations return exactly one string per reference, in the order
/// the references were given. They must not reorder entries even if the
/// style would normally sort its bibliography.
pub trait StyleProcessor {
    fn make_bibliography(&self, references: &[Reference]) -> Result<Vec<String>>;
}

/// Processor for the styles built into this crate.
#[derive(Debug, Clone, Copy)]
pub struct CslProcessor {
    style: BuiltinStyle,
    locale: &'static Locale,
}

impl CslProcessor {
    pub fn new(style: BuiltinStyle, locale: &'static Locale) -> Self {
        CslProcessor { style, locale }
    }
}

impl Default for CslProcessor {
    fn default() -> Self {
        CslProcessor::new(BuiltinStyle::default(), Locale::en_us())
    }
}

impl StyleProcessor for CslProcessor {
    fn make_bibliography(&self, references: &[Reference]) -> Result<Vec<String>> {
        tracing::debug!(
            style = self.style.name(),
            locale = self.locale.lang,
            count = references.len(),
            "Formatting bibliography"
        );
        references
            .iter()
            .map(|reference| self.style.format_entry(reference, self.locale))
            .collect()
    }
}
