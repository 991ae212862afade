/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Depth-first, document-order traversal over every inline in a block tree.
 *
 * The callback sees each inline before its children. When the callback
 * replaces an inline, traversal continues into the replacement's children,
 * so a node turned into a leaf is never revisited.
 */

use crate::block::Block;
use crate::inline::Inline;

/// Visit every inline reachable from `blocks`, in document order.
pub fn walk_inlines<F: FnMut(&Inline)>(blocks: &[Block], f: &mut F) {
    for block in blocks {
        walk_block(block, f);
    }
}

fn walk_block<F: FnMut(&Inline)>(block: &Block, f: &mut F) {
    match block {
        Block::Plain(content) | Block::Paragraph(content) | Block::Header { content, .. } => {
            walk_inline_seq(content, f);
        }
        Block::BlockQuote(content) | Block::Div { content, .. } => walk_inlines(content, f),
        Block::OrderedList { items, .. } | Block::BulletList { items } => {
            for item in items {
                walk_inlines(item, f);
            }
        }
        Block::RawBlock { .. } | Block::HorizontalRule => {}
    }
}

fn walk_inline_seq<F: FnMut(&Inline)>(inlines: &[Inline], f: &mut F) {
    for inline in inlines {
        f(inline);
        match inline {
            Inline::Emph(content)
            | Inline::Strong(content)
            | Inline::Superscript(content)
            | Inline::Subscript(content)
            | Inline::Span(content)
            | Inline::Link { content, .. } => walk_inline_seq(content, f),
            Inline::Note(blocks) => walk_inlines(blocks, f),
            _ => {}
        }
    }
}

/// Visit every inline reachable from `blocks` mutably, in document order.
pub fn walk_inlines_mut<F: FnMut(&mut Inline)>(blocks: &mut [Block], f: &mut F) {
    for block in blocks {
        walk_block_mut(block, f);
    }
}

fn walk_block_mut<F: FnMut(&mut Inline)>(block: &mut Block, f: &mut F) {
    match block {
        Block::Plain(content) | Block::Paragraph(content) | Block::Header { content, .. } => {
            walk_inline_seq_mut(content, f);
        }
        Block::BlockQuote(content) | Block::Div { content, .. } => walk_inlines_mut(content, f),
        Block::OrderedList { items, .. } | Block::BulletList { items } => {
            for item in items {
                walk_inlines_mut(item, f);
            }
        }
        Block::RawBlock { .. } | Block::HorizontalRule => {}
    }
}

fn walk_inline_seq_mut<F: FnMut(&mut Inline)>(inlines: &mut [Inline], f: &mut F) {
    for inline in inlines.iter_mut() {
        f(inline);
        match inline {
            Inline::Emph(content)
            | Inline::Strong(content)
            | Inline::Superscript(content)
            | Inline::Subscript(content)
            | Inline::Span(content)
            | Inline::Link { content, .. } => walk_inline_seq_mut(content, f),
            Inline::Note(blocks) => walk_inlines_mut(blocks, f),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{Citation, Cite, raw_html_inline};

    fn cite(id: &str) -> Inline {
        Inline::Cite(Cite {
            citations: vec![Citation::new(id)],
            text: format!("[@{}]", id),
        })
    }

    fn nested_doc() -> Vec<Block> {
        vec![
            Block::Paragraph(vec![
                cite("a"),
                Inline::Emph(vec![cite("b")]),
                Inline::Note(vec![Block::Plain(vec![cite("c")])]),
            ]),
            Block::BulletList {
                items: vec![vec![Block::Plain(vec![cite("d")])]],
            },
            Block::Div {
                id: String::new(),
                classes: vec![],
                content: vec![Block::BlockQuote(vec![Block::Paragraph(vec![
                    Inline::Link {
                        content: vec![cite("e")],
                        url: "#".into(),
                        title: String::new(),
                    },
                ])])],
            },
        ]
    }

    fn cite_ids(blocks: &[Block]) -> Vec<String> {
        let mut ids = Vec::new();
        walk_inlines(blocks, &mut |inline| {
            if let Inline::Cite(c) = inline {
                ids.extend(c.citations.iter().map(|c| c.id.clone()));
            }
        });
        ids
    }

    #[test]
    fn test_walk_visits_in_document_order() {
        assert_eq!(cite_ids(&nested_doc()), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_walk_mut_replacements_are_not_revisited() {
        let mut blocks = nested_doc();
        let mut visits = 0;
        walk_inlines_mut(&mut blocks, &mut |inline| {
            if matches!(inline, Inline::Cite(_)) {
                visits += 1;
                *inline = raw_html_inline("<span></span>");
            }
        });
        assert_eq!(visits, 5);
        assert!(cite_ids(&blocks).is_empty());
    }
}
