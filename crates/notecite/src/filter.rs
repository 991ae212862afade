/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Numbered bibliography filter.
 *
 * Rewrites every Cite inline into a numbered, anchored marker and renders
 * one reference per distinct key, in first-cited order, optionally
 * appending them as a "References" section.
 */

use indexmap::IndexMap;
use notecite_ast::{Document, Inline, walk_inlines};
use notecite_csl::StyleProcessor;

use crate::adapter::StyleAdapter;
use crate::diagnostic::DiagnosticMessage;
use crate::error::Result;
use crate::options::BibliographyOptions;
use crate::registry::CitationRegistry;
use crate::render::render_references;
use crate::rewriter::rewrite_citations;
use crate::section::append_bibliography_section;

/// What the filter produced besides the rewritten document.
#[derive(Debug, Clone, Default)]
pub struct FilterOutput {
    /// Rendered HTML references, one per distinct cited key.
    pub references: Vec<String>,
    /// Occurrence count per key, in first-cited order.
    pub counts: IndexMap<String, usize>,
    pub diagnostics: Vec<DiagnosticMessage>,
}

/// Apply the numbered bibliography filter to a document.
///
/// This is the main entry point. It:
/// 1. Numbers and rewrites all Cite inlines in document order
/// 2. Formats one bibliography entry per distinct key with `processor`
/// 3. Renders the entries with anchors and back-references
/// 4. Appends a bibliography section if the options ask for one
///
/// A style processor failure is returned as an error and no section is
/// appended. Missing bibliography entries are reported in
/// [`FilterOutput::diagnostics`].
pub fn apply_bibliography_filter<P: StyleProcessor + ?Sized>(
    document: &mut Document,
    options: &BibliographyOptions,
    processor: &P,
) -> Result<FilterOutput> {
    let mut registry = CitationRegistry::new();
    rewrite_citations(&mut document.blocks, &mut registry);

    if registry.is_empty() {
        tracing::debug!("No citations found");
        return Ok(FilterOutput::default());
    }

    let keys: Vec<&str> = registry.keys().collect();
    let mut diagnostics = Vec::new();
    let formatted = StyleAdapter::new(&options.bibliography, processor)
        .format_entries(&keys, &mut diagnostics)?;

    let occurrence_counts: Vec<usize> = registry.counts().values().copied().collect();
    let references = render_references(&formatted, &occurrence_counts);

    if options.append_bibliography_section {
        append_bibliography_section(&mut document.blocks, &references);
    }

    tracing::info!(
        references = references.len(),
        missing = diagnostics.len(),
        "Rendered bibliography"
    );

    Ok(FilterOutput {
        references,
        counts: registry.into_counts(),
        diagnostics,
    })
}

/// Count citation occurrences per key, in first-cited order, without
/// modifying the document.
pub fn extract_citations(document: &Document) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    walk_inlines(&document.blocks, &mut |inline| {
        if let Inline::Cite(cite) = inline {
            for citation in &cite.citations {
                *counts.entry(citation.id.clone()).or_insert(0) += 1;
            }
        }
    });
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use notecite_ast::{Block, Citation, Cite};
    use notecite_csl::{Bibliography, Reference};

    struct IdProcessor;

    impl StyleProcessor for IdProcessor {
        fn make_bibliography(&self, references: &[Reference]) -> notecite_csl::Result<Vec<String>> {
            Ok(references.iter().map(|r| format!("{}.", r.id)).collect())
        }
    }

    fn cite(key: &str) -> Inline {
        Inline::Cite(Cite {
            citations: vec![Citation::new(key)],
            text: format!("[@{}]", key),
        })
    }

    #[test]
    fn test_no_citations_no_section() {
        let mut doc = Document::new(vec![Block::Paragraph(vec![Inline::Str("Hi".into())])]);
        let options = BibliographyOptions::default().with_bibliography_section(true);
        let output = apply_bibliography_filter(&mut doc, &options, &IdProcessor).unwrap();
        assert!(output.references.is_empty());
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_counts_follow_first_citation_order() {
        let mut doc = Document::new(vec![Block::Paragraph(vec![cite("b"), cite("a"), cite("b")])]);
        let options = BibliographyOptions::new(Bibliography::default());
        let output = apply_bibliography_filter(&mut doc, &options, &IdProcessor).unwrap();
        let counts: Vec<(&str, usize)> = output
            .counts
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(counts, vec![("b", 2), ("a", 1)]);
        assert!(output.references[0].starts_with("<span id=\"ref-1\">b. "));
        // Both keys are missing from the empty bibliography
        assert_eq!(output.diagnostics.len(), 2);
    }

    #[test]
    fn test_extract_citations_does_not_mutate() {
        let doc = Document::new(vec![Block::Paragraph(vec![cite("x"), cite("x")])]);
        let before = doc.clone();
        let counts = extract_citations(&doc);
        assert_eq!(counts.get("x"), Some(&2));
        assert_eq!(doc, before);
    }
}
