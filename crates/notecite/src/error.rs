/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Result type alias for notecite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop bibliography generation.
///
/// Missing bibliography entries are not errors; they are reported as
/// [`DiagnosticMessage`](crate::DiagnosticMessage)s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bibliography loading or style processing failed.
    #[error(transparent)]
    Csl(#[from] notecite_csl::Error),

    /// The style processor did not return one entry per citation key.
    #[error("Style processor returned {actual} entries for {expected} citation keys")]
    ReferenceCountMismatch { expected: usize, actual: usize },

    #[error("Unsupported bibliography format '{0}' (expected 'csl')")]
    UnsupportedFormat(String),
}
