/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::meta::Meta;
use serde::{Deserialize, Serialize};

/*
 * The root of a parsed document: front matter metadata followed by the
 * top-level block sequence.
 */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (front matter), in source order.
    #[serde(default)]
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Document {
    pub fn new(blocks: Blocks) -> Self {
        Document {
            meta: Meta::new(),
            blocks,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
