/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Str(String),
    Space,
    SoftBreak,
    LineBreak,
    Emph(Inlines),
    Strong(Inlines),
    Superscript(Inlines),
    Subscript(Inlines),
    Code(String),
    Link {
        content: Inlines,
        url: String,
        #[serde(default)]
        title: String,
    },
    Span(Inlines),
    Note(Blocks),

    /// A citation as produced by the citation syntax extension.
    ///
    /// After the bibliography filter runs, no `Cite` remains in the tree:
    /// each one has been replaced by a `RawInline` carrying rendered markup.
    Cite(Cite),

    RawInline {
        format: String,
        text: String,
    },
}

pub type Inlines = Vec<Inline>;

/// A citation node: one location in the document citing one or more keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cite {
    pub citations: Vec<Citation>,
    /// Surface syntax of the whole marker, e.g. `[see @doe99, p. 3; @roe]`.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub mode: CitationMode,
}

impl Citation {
    pub fn new(id: impl Into<String>) -> Self {
        Citation {
            id: id.into(),
            prefix: String::new(),
            suffix: String::new(),
            mode: CitationMode::NormalCitation,
        }
    }

    pub fn suppress_author(&self) -> bool {
        self.mode == CitationMode::SuppressAuthor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CitationMode {
    AuthorInText,
    SuppressAuthor,
    #[default]
    NormalCitation,
}

pub fn raw_html_inline(text: impl Into<String>) -> Inline {
    Inline::RawInline {
        format: "html".to_string(),
        text: text.into(),
    }
}

/// Split plain text into `Str` and `Space` inlines.
pub fn text_inlines(text: &str) -> Inlines {
    let mut result = Vec::new();
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            result.push(Inline::Space);
        }
        if !word.is_empty() {
            result.push(Inline::Str(word.to_string()));
        }
    }
    result
}

/// Convert inlines to plain text (for metadata extraction).
pub fn inlines_to_text(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Str(s) => result.push_str(s),
            Inline::Space | Inline::SoftBreak => result.push(' '),
            Inline::LineBreak => result.push('\n'),
            Inline::Emph(content)
            | Inline::Strong(content)
            | Inline::Superscript(content)
            | Inline::Subscript(content)
            | Inline::Span(content)
            | Inline::Link { content, .. } => result.push_str(&inlines_to_text(content)),
            Inline::Code(text) | Inline::RawInline { text, .. } => result.push_str(text),
            Inline::Cite(cite) => result.push_str(&cite.text),
            Inline::Note(_) => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inlines_splits_on_spaces() {
        let inlines = text_inlines("References and notes");
        assert_eq!(
            inlines,
            vec![
                Inline::Str("References".into()),
                Inline::Space,
                Inline::Str("and".into()),
                Inline::Space,
                Inline::Str("notes".into()),
            ]
        );
    }

    #[test]
    fn test_inlines_to_text_flattens_nested_content() {
        let inlines = vec![
            Inline::Str("A".into()),
            Inline::Space,
            Inline::Emph(vec![Inline::Str("nested".into())]),
            Inline::SoftBreak,
            Inline::Code("x".into()),
        ];
        assert_eq!(inlines_to_text(&inlines), "A nested x");
    }

    #[test]
    fn test_citation_mode_defaults_to_normal() {
        let citation: Citation = serde_json::from_str(r#"{"id": "doe99"}"#).unwrap();
        assert_eq!(citation.mode, CitationMode::NormalCitation);
        assert!(!citation.suppress_author());
        assert!(citation.prefix.is_empty());
    }
}
