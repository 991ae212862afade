/*
 * anchor.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Anchor ids shared by the inline markers and the reference list.
 * Entry `i` is `ref-i`; the `n`th citation of entry `i` is `ref-i-n`.
 */

pub fn entry_anchor(index: usize) -> String {
    format!("ref-{}", index)
}

pub fn occurrence_anchor(index: usize, occurrence: usize) -> String {
    format!("ref-{}-{}", index, occurrence)
}
