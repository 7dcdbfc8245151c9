//! Line tokenization
//!
//! Normalizes a line into lowercase alphabetic words. Characters that are
//! neither alphabetic nor whitespace are dropped with no replacement, then
//! the filtered string is split on the single space character. Splitting on
//! ' ' rather than on whitespace classes is deliberate: tabs survive the
//! filter but do not separate words, consecutive spaces yield empty tokens,
//! and words joined only by removed characters concatenate.

use anyhow::Result;
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::corpus::ingest::ingest;

/// Tokenize one line into lowercase alphabetic words
pub fn tokenize(line: &str) -> Vec<String> {
    let filtered: String = line
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    filtered.split(' ').map(str::to_string).collect()
}

/// Run the tokens command
pub fn run_tokens(root: &Path, config: RenderConfig) -> Result<()> {
    let sources = ingest(root)?;

    let mut result_set = ResultSet::new();
    for source in &sources {
        for line in &source.lines {
            let tokens = tokenize(line);
            result_set.push(
                ResultItem::tokens(source.path.clone(), &tokens).with_excerpt(tokens.join(" ")),
            );
        }
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
