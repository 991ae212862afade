/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for bibliography loading and style processing.

use std::path::PathBuf;

/// Result type alias for notecite-csl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bibliography file could not be read.
    #[error("Failed to read bibliography '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bibliography data is not valid CSL-JSON.
    #[error("Invalid CSL-JSON bibliography: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date in a reference.
    #[error("Invalid date '{value}' in reference '{id}' field '{field}'")]
    InvalidDate {
        id: String,
        field: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = Error::InvalidDate {
            id: "smith2020".to_string(),
            field: "issued".to_string(),
            value: "2020-14".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date '2020-14' in reference 'smith2020' field 'issued'"
        );
    }

    #[test]
    fn test_io_display_names_path() {
        let err = Error::Io {
            path: PathBuf::from("refs.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let display = err.to_string();
        assert!(display.contains("refs.json"), "Got: {}", display);
        assert!(display.contains("gone"), "Got: {}", display);
    }
}
