/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::inline::{Inline, Inlines, text_inlines};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Plain(Inlines),
    Paragraph(Inlines),
    Header {
        level: usize,
        content: Inlines,
    },
    BlockQuote(Blocks),
    OrderedList {
        #[serde(default = "default_list_start")]
        start: usize,
        items: Vec<Blocks>,
    },
    BulletList {
        items: Vec<Blocks>,
    },
    Div {
        #[serde(default)]
        id: String,
        #[serde(default)]
        classes: Vec<String>,
        content: Blocks,
    },
    RawBlock {
        format: String,
        text: String,
    },
    HorizontalRule,
}

pub type Blocks = Vec<Block>;

fn default_list_start() -> usize {
    1
}

pub fn header(level: usize, text: &str) -> Block {
    Block::Header {
        level,
        content: text_inlines(text),
    }
}

/// Build an ordered list with one `Plain` item per inline sequence.
pub fn ordered_list(items: impl IntoIterator<Item = Vec<Inline>>) -> Block {
    Block::OrderedList {
        start: 1,
        items: items
            .into_iter()
            .map(|inlines| vec![Block::Plain(inlines)])
            .collect(),
    }
}
