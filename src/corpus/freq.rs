//! Word frequency table and top-K reporting
//!
//! Counts tokens across the flattened token stream and ranks the K most
//! frequent, ties broken by first-encountered order. No stemming and no
//! stop-word removal; the top of the report is usually stop-words.

use anyhow::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::corpus::ingest::{corpus, ingest};
use crate::corpus::tokenize::tokenize;

/// Default number of words in a report
pub const DEFAULT_TOP_K: usize = 5;

/// Occurrence counts with first-seen ordering
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one token. The empty string counts like any other token.
    pub fn observe(&mut self, token: &str) {
        match self.counts.entry(token.to_string()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
                self.order.push(token.to_string());
            }
        }
    }

    /// Count every token in an iterator
    pub fn observe_all<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            self.observe(token);
        }
    }

    /// Number of distinct tokens
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `k` most frequent tokens as (word, count) pairs, count
    /// descending, ties in first-seen order.
    pub fn top(&self, k: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|word| (word.clone(), self.counts[word]))
            .collect();

        // Stable sort over first-seen order keeps the tie-break deterministic
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Run the report command: the full pipeline from directory to top-K words
pub fn run_report(root: &Path, top_k: usize, config: RenderConfig) -> Result<()> {
    let sources = ingest(root)?;

    let mut table = FrequencyTable::new();
    for line in corpus(&sources) {
        let tokens = tokenize(&line);
        table.observe_all(tokens.iter().map(String::as_str));
    }

    let mut result_set = ResultSet::new();
    for (rank, (word, count)) in table.top(top_k).into_iter().enumerate() {
        result_set.push(ResultItem::word(word, count, rank + 1));
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut table = FrequencyTable::new();
        table.observe_all(["the", "cat", "the"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.top(10), vec![("the".into(), 2), ("cat".into(), 1)]);
    }

    #[test]
    fn test_ties_break_by_first_seen() {
        let mut table = FrequencyTable::new();
        table.observe_all(["the", "cat", "sat", "the", "dog", "sat", "cats", "and", "dogs"]);

        let top = table.top(3);
        assert_eq!(
            top,
            vec![("the".into(), 2), ("sat".into(), 2), ("cat".into(), 1)]
        );
    }

    #[test]
    fn test_top_k_truncates() {
        let mut table = FrequencyTable::new();
        table.observe_all(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(table.top(5).len(), 5);
    }

    #[test]
    fn test_top_k_larger_than_vocabulary() {
        let mut table = FrequencyTable::new();
        table.observe_all(["one", "two"]);
        assert_eq!(table.top(10).len(), 2);
    }

    #[test]
    fn test_empty_string_is_a_token() {
        let mut table = FrequencyTable::new();
        table.observe_all(["", "word", ""]);
        assert_eq!(table.top(1), vec![("".into(), 2)]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert!(table.top(5).is_empty());
    }
}
