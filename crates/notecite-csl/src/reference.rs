/*
 * reference.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reference types for CSL-JSON bibliographic data.
//!
//! This module defines types for parsing and representing bibliographic
//! references in CSL-JSON format, and the keyed [`Bibliography`] that
//! holds them.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A bibliographic reference in CSL-JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Unique identifier for this reference.
    /// CSL-JSON allows both string and integer IDs, so we accept both.
    #[serde(deserialize_with = "deserialize_string_or_int")]
    pub id: String,

    /// Reference type (e.g., "book", "article-journal", "chapter").
    #[serde(rename = "type", default)]
    pub ref_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "container-title", skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(rename = "collection-title", skip_serializing_if = "Option::is_none")]
    pub collection_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "publisher-place", skip_serializing_if = "Option::is_none")]
    pub publisher_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<StringOrNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<StringOrNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<StringOrNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "DOI", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    // Name variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<Vec<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator: Option<Vec<Name>>,

    // Date variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateVariable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessed: Option<DateVariable>,

    // Other fields captured in a map for extensibility
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

impl Reference {
    /// Stand-in for a cited key with no bibliography entry.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Reference {
            id: id.into(),
            ref_type: "article".to_string(),
            title: None,
            container_title: None,
            collection_title: None,
            publisher: None,
            publisher_place: None,
            genre: None,
            edition: None,
            volume: None,
            issue: None,
            page: None,
            doi: None,
            url: None,
            author: None,
            editor: None,
            translator: None,
            issued: None,
            accessed: None,
            other: HashMap::new(),
        }
    }
}

/// A string or number value (CSL allows both for some fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl StringOrNumber {
    /// Get the value as a string.
    pub fn as_str(&self) -> String {
        match self {
            StringOrNumber::String(s) => s.clone(),
            StringOrNumber::Number(n) => n.to_string(),
        }
    }

    /// Get the value as a number if possible.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            StringOrNumber::String(s) => s.trim().parse().ok(),
            StringOrNumber::Number(n) => Some(*n),
        }
    }
}

fn deserialize_string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("expected string or number for id")),
    }
}

/// A name in CSL-JSON format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct Name {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,

    /// Dropping particle (e.g., "de" in "Ludwig de Beethoven").
    #[serde(rename = "dropping-particle", skip_serializing_if = "Option::is_none")]
    pub dropping_particle: Option<String>,

    /// Non-dropping particle (e.g., "van" in "Vincent van Gogh").
    #[serde(rename = "non-dropping-particle", skip_serializing_if = "Option::is_none")]
    pub non_dropping_particle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Literal name (for institutional names or when family/given doesn't apply).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl Name {
    /// "van Gogh, Vincent" form, used for the first name of a bibliography entry.
    pub fn inverted(&self) -> String {
        if let Some(ref lit) = self.literal {
            return lit.clone();
        }

        let family = join_present(&[self.non_dropping_particle.as_deref(), self.family.as_deref()]);
        let given = join_present(&[self.given.as_deref(), self.dropping_particle.as_deref()]);

        let mut result = match (family.is_empty(), given.is_empty()) {
            (false, false) => format!("{}, {}", family, given),
            (false, true) => family,
            (true, _) => given,
        };
        if let Some(ref suffix) = self.suffix {
            result.push_str(", ");
            result.push_str(suffix);
        }
        result
    }

    /// "Vincent van Gogh" form.
    pub fn direct(&self) -> String {
        if let Some(ref lit) = self.literal {
            return lit.clone();
        }
        join_present(&[
            self.given.as_deref(),
            self.dropping_particle.as_deref(),
            self.non_dropping_particle.as_deref(),
            self.family.as_deref(),
            self.suffix.as_deref(),
        ])
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A date variable in CSL-JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateVariable {
    /// Date parts: [[year, month, day], [end_year, end_month, end_day]] for ranges.
    /// Values can be integers or strings (CSL-JSON allows both).
    #[serde(
        rename = "date-parts",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub date_parts: Option<Vec<Vec<StringOrNumber>>>,

    /// Literal date string (when structured date is not available).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,

    /// Raw date string, e.g. "2020-05-01".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// A validated calendar date. Months 13-16 stand for the four seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// How a [`DateVariable`] should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedDate {
    Parts(DateParts),
    Literal(String),
}

impl DateVariable {
    /// Resolve the start of this date, validating its parts.
    ///
    /// `id` and `field` are only used to describe failures.
    pub fn resolve(&self, id: &str, field: &str) -> Result<Option<ResolvedDate>> {
        let invalid = |value: String| Error::InvalidDate {
            id: id.to_string(),
            field: field.to_string(),
            value,
        };

        if let Some(first) = self.date_parts.as_ref().and_then(|p| p.first()) {
            if first.is_empty() {
                return Ok(None);
            }
            let numbers: Vec<i64> = first
                .iter()
                .map(|p| p.as_number().ok_or_else(|| invalid(p.as_str())))
                .collect::<Result<_>>()?;
            let shown = first
                .iter()
                .map(StringOrNumber::as_str)
                .collect::<Vec<_>>()
                .join("-");
            return validate_parts(&numbers)
                .map(|parts| Some(ResolvedDate::Parts(parts)))
                .ok_or_else(|| invalid(shown));
        }

        if let Some(ref raw) = self.raw {
            let numbers: Option<Vec<i64>> =
                raw.trim().split('-').map(|p| p.parse().ok()).collect();
            return Ok(Some(
                match numbers.as_deref().and_then(validate_parts) {
                    Some(parts) => ResolvedDate::Parts(parts),
                    None => ResolvedDate::Literal(raw.clone()),
                },
            ));
        }

        Ok(self.literal.clone().map(ResolvedDate::Literal))
    }
}

fn validate_parts(numbers: &[i64]) -> Option<DateParts> {
    let year = i32::try_from(*numbers.first()?).ok()?;
    let month = match numbers.get(1) {
        Some(m) if (1..=16).contains(m) => Some(*m as u32),
        Some(_) => return None,
        None => None,
    };
    let day = match numbers.get(2) {
        Some(d) if (1..=31).contains(d) && month.is_some_and(|m| m <= 12) => Some(*d as u32),
        Some(_) => return None,
        None => None,
    };
    Some(DateParts { year, month, day })
}

/// Bibliographic references keyed by id, in the order they were supplied.
///
/// When two references share an id the first one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bibliography {
    references: IndexMap<String, Reference>,
}

impl Bibliography {
    pub fn new(references: impl IntoIterator<Item = Reference>) -> Self {
        let mut bibliography = Bibliography::default();
        bibliography.extend(references);
        bibliography
    }

    /// Parse a CSL-JSON array of references.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let references: Vec<Reference> = serde_json::from_str(json)?;
        Ok(Bibliography::new(references))
    }

    /// Load a CSL-JSON bibliography file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Bibliography::from_json_str(&content)
    }

    pub fn extend(&mut self, references: impl IntoIterator<Item = Reference>) {
        for reference in references {
            if self.references.contains_key(&reference.id) {
                tracing::debug!(id = %reference.id, "Ignoring duplicate bibliography entry");
                continue;
            }
            self.references.insert(reference.id.clone(), reference);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.references.values()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
