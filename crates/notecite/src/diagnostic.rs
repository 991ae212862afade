/*
 * diagnostic.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Diagnostic messages reported alongside a processed document.
//!
//! Conditions that do not stop processing (such as a citation key with no
//! bibliography entry) are collected as diagnostics instead of errors.
//!
//! Codes follow `N-<subsystem>-<number>`:
//!
//! | code    | meaning                           |
//! |---------|-----------------------------------|
//! | `N-1-1` | cited key has no bibliography entry |

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub code: Option<String>,
    pub title: String,
    pub problem: Option<String>,
    pub hints: Vec<String>,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        DiagnosticMessage {
            kind,
            code: None,
            title: title.into(),
            problem: None,
            hints: Vec::new(),
        }
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    pub fn add_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// A cited key was not found in the bibliography.
    pub fn missing_reference(key: &str) -> Self {
        DiagnosticMessage::warning("Bibliography entry not found")
            .with_code("N-1-1")
            .with_problem(format!(
                "Citation key `{}` has no matching bibliography entry; a placeholder was used",
                key
            ))
            .add_hint("Check the key for typos, or add an entry with this `id` to the bibliography")
    }

    /// Plain-text rendering for terminal output.
    pub fn to_text(&self) -> String {
        let kind = match self.kind {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        };
        let mut text = match self.code {
            Some(ref code) => format!("{} [{}]: {}", kind, code, self.title),
            None => format!("{}: {}", kind, self.title),
        };
        if let Some(ref problem) = self.problem {
            text.push_str("\n  ");
            text.push_str(problem);
        }
        for hint in &self.hints {
            text.push_str("\n  ℹ ");
            text.push_str(hint);
        }
        text
    }
}
