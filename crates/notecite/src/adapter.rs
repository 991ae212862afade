/*
 * adapter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Bridges the citation registry and a style processor.
 */

use crate::diagnostic::DiagnosticMessage;
use crate::error::{Error, Result};
use notecite_csl::{Bibliography, Reference, StyleProcessor};

/// Formats bibliography entries for citation keys, in the order asked.
///
/// Keys without a bibliography entry are formatted from a placeholder
/// reference and reported as a warning, so a batch always yields exactly
/// one entry per key. A failure inside the style processor fails the
/// whole batch.
pub struct StyleAdapter<'a, P: StyleProcessor + ?Sized> {
    bibliography: &'a Bibliography,
    processor: &'a P,
}

impl<'a, P: StyleProcessor + ?Sized> StyleAdapter<'a, P> {
    pub fn new(bibliography: &'a Bibliography, processor: &'a P) -> Self {
        StyleAdapter {
            bibliography,
            processor,
        }
    }

    /// Look up a reference, falling back to a placeholder.
    fn retrieve_item(&self, key: &str, diagnostics: &mut Vec<DiagnosticMessage>) -> Reference {
        match self.bibliography.get(key) {
            Some(reference) => reference.clone(),
            None => {
                tracing::warn!(key = %key, "Item not found in bibliography");
                diagnostics.push(DiagnosticMessage::missing_reference(key));
                Reference::placeholder(key)
            }
        }
    }

    pub fn format_entries<S: AsRef<str>>(
        &self,
        keys: &[S],
        diagnostics: &mut Vec<DiagnosticMessage>,
    ) -> Result<Vec<String>> {
        let references: Vec<Reference> = keys
            .iter()
            .map(|key| self.retrieve_item(key.as_ref(), diagnostics))
            .collect();

        let entries = self.processor.make_bibliography(&references)?;
        if entries.len() != keys.len() {
            return Err(Error::ReferenceCountMismatch {
                expected: keys.len(),
                actual: entries.len(),
            });
        }
        Ok(entries)
    }
}
