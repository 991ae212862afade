/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Bibliography filter configuration, from code or from document metadata.
 */

use std::path::{Path, PathBuf};
use std::str::FromStr;

use notecite_ast::{Meta, MetaValue};
use notecite_csl::{Bibliography, Reference};

use crate::error::{Error, Result};

/// Bibliography data formats. Only CSL-JSON is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BibliographyFormat {
    #[default]
    Csl,
}

impl FromStr for BibliographyFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csl" | "csl-json" => Ok(BibliographyFormat::Csl),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BibliographyOptions {
    pub bibliography: Bibliography,
    /// Append a "References" heading and list after the document body.
    pub append_bibliography_section: bool,
}

impl BibliographyOptions {
    pub fn new(bibliography: Bibliography) -> Self {
        BibliographyOptions {
            bibliography,
            ..Default::default()
        }
    }

    pub fn with_bibliography_section(mut self, append: bool) -> Self {
        self.append_bibliography_section = append;
        self
    }

    /// Read options from document metadata.
    ///
    /// Recognized keys:
    /// - `bibliography`: CSL-JSON file path, or list of paths, resolved
    ///   against `base_dir` when relative
    /// - `references`: inline list of CSL-JSON reference maps
    /// - `bibliography-format`: must be `csl` when present
    /// - `append-bibliography-section`: bool
    ///
    /// Inline references come before file references, so an inline entry
    /// wins over a file entry with the same id.
    pub fn from_meta(meta: &Meta, base_dir: Option<&Path>) -> Result<Self> {
        let mut options = BibliographyOptions::default();

        // CSL-JSON is the only format, so there is nothing to record
        if let Some(format) = meta.get("bibliography-format").and_then(MetaValue::as_text) {
            format.parse::<BibliographyFormat>()?;
        }

        options.append_bibliography_section = meta
            .get("append-bibliography-section")
            .and_then(MetaValue::as_bool)
            .unwrap_or(false);

        if let Some(MetaValue::MetaList(items)) = meta.get("references") {
            options.bibliography.extend(meta_references(items));
        }

        for path in bibliography_paths(meta) {
            let path = match base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            };
            tracing::debug!(path = %path.display(), "Loading bibliography");
            options.bibliography.extend(load_bibliography(&path)?.iter().cloned());
        }

        Ok(options)
    }
}

/// Load a CSL-JSON bibliography file.
pub fn load_bibliography(path: &Path) -> Result<Bibliography> {
    Ok(Bibliography::load(path)?)
}

fn bibliography_paths(meta: &Meta) -> Vec<PathBuf> {
    match meta.get("bibliography") {
        Some(MetaValue::MetaList(items)) => items
            .iter()
            .filter_map(MetaValue::as_text)
            .map(PathBuf::from)
            .collect(),
        Some(value) => value.as_text().map(PathBuf::from).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Convert inline metadata references, skipping ones that are not valid CSL.
fn meta_references(items: &[MetaValue]) -> Vec<Reference> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Reference>(item.to_json()) {
            Ok(reference) => Some(reference),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping invalid inline reference");
                None
            }
        })
        .collect()
}
