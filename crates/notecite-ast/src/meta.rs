/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::{Inlines, inlines_to_text};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

// Like Pandoc's MetaValue, there are no numbers or nulls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    MetaString(String),
    MetaBool(bool),
    MetaInlines(Inlines),
    MetaBlocks(Blocks),
    MetaList(Vec<MetaValue>),
    MetaMap(LinkedHashMap<String, MetaValue>),
}

impl Default for MetaValue {
    fn default() -> Self {
        MetaValue::MetaMap(LinkedHashMap::new())
    }
}

pub type Meta = LinkedHashMap<String, MetaValue>;

impl MetaValue {
    /// String content of a MetaString or MetaInlines.
    pub fn as_text(&self) -> Option<String> {
        match self {
            MetaValue::MetaString(s) => Some(s.clone()),
            MetaValue::MetaInlines(content) => Some(inlines_to_text(content)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::MetaBool(b) => Some(*b),
            // front matter values sometimes arrive as text
            MetaValue::MetaString(_) | MetaValue::MetaInlines(_) => {
                match self.as_text()?.trim() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Convert to a plain JSON value. Lists and maps convert recursively;
    /// inline content is flattened to text.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            MetaValue::MetaString(s) => serde_json::Value::String(s.clone()),
            MetaValue::MetaBool(b) => serde_json::Value::Bool(*b),
            MetaValue::MetaInlines(content) => serde_json::Value::String(inlines_to_text(content)),
            MetaValue::MetaBlocks(_) => serde_json::Value::Null,
            MetaValue::MetaList(items) => {
                serde_json::Value::Array(items.iter().map(MetaValue::to_json).collect())
            }
            MetaValue::MetaMap(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}
