/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Citation numbering.
//!
//! The registry assigns each distinct citation key a 1-based index the first
//! time it is seen and counts every later occurrence. Indices follow
//! first-seen order: the Nth distinct key gets index N. Keys are never
//! removed, so an index never changes once assigned.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationRegistry {
    counts: IndexMap<String, usize>,
}

impl CitationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key` and return its index.
    pub fn register(&mut self, key: &str) -> usize {
        let entry = self.counts.entry(key.to_string());
        let index = entry.index() + 1;
        *entry.or_insert(0) += 1;
        index
    }

    /// How many times `key` has been registered so far.
    pub fn occurrences(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Occurrence counts keyed by citation key, in first-seen order.
    pub fn counts(&self) -> &IndexMap<String, usize> {
        &self.counts
    }

    /// Keys in first-seen order (index order).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn into_counts(self) -> IndexMap<String, usize> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_assigns_indices() {
        let mut registry = CitationRegistry::new();
        assert_eq!(registry.register("x"), 1);
        assert_eq!(registry.register("y"), 2);
        assert_eq!(registry.register("x"), 1);
        assert_eq!(registry.register("z"), 3);

        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(registry.occurrences("x"), 2);
        assert_eq!(registry.occurrences("y"), 1);
        assert_eq!(registry.occurrences("never"), 0);
    }

    #[test]
    fn test_counts_preserve_first_seen_order() {
        let mut registry = CitationRegistry::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            registry.register(key);
        }
        let counts: Vec<_> = registry
            .counts()
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_indices_are_dense_and_unique() {
        let mut registry = CitationRegistry::new();
        let keys = ["k3", "k1", "k3", "k2", "k1", "k4", "k2"];
        let mut seen = Vec::new();
        for key in keys {
            let index = registry.register(key);
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_same_input_same_indices() {
        let run = || {
            let mut registry = CitationRegistry::new();
            ["q", "p", "q", "r"]
                .iter()
                .map(|k| registry.register(k))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
