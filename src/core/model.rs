//! Unified Result Model
//!
//! All commands (scan, sniff, ingest, tokens, report) map to this unified
//! Result Model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A discovered or ingested source file
    File,
    /// One corpus line
    Line,
    /// Token list derived from one corpus line
    Tokens,
    /// One ranked word in a frequency report
    Word,
    /// An error entry
    Error,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Modification time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_ms: Option<i64>,

    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Content hash (XXH3 of the raw bytes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Detected encoding label ("utf-8" / "utf-16")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Number of lines contributed to the corpus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexError {
    pub code: String,
    pub message: String,
}

impl LexError {
    #[allow(dead_code)]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands must produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Path relative to root, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Excerpt of the content (a corpus line, a word, a file preview)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Structured data payload (token lists, word counts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Metadata
    pub meta: Meta,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<LexError>,
}

impl ResultItem {
    /// Create a new file result
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: Kind::File,
            path: Some(path.into()),
            excerpt: None,
            data: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new corpus line result
    pub fn line(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Kind::Line,
            path: Some(path.into()),
            excerpt: Some(text.into()),
            data: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new token list result for one corpus line
    pub fn tokens(path: impl Into<String>, tokens: &[String]) -> Self {
        Self {
            kind: Kind::Tokens,
            path: Some(path.into()),
            excerpt: None,
            data: serde_json::to_value(tokens).ok(),
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new ranked word result
    pub fn word(word: impl Into<String>, count: usize, rank: usize) -> Self {
        let word = word.into();
        let data = serde_json::json!({
            "word": word,
            "count": count,
            "rank": rank,
        });
        Self {
            kind: Kind::Word,
            path: None,
            excerpt: Some(word),
            data: Some(data),
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    #[allow(dead_code)]
    pub fn error(error: LexError) -> Self {
        Self {
            kind: Kind::Error,
            path: None,
            excerpt: None,
            data: None,
            meta: Meta::default(),
            errors: vec![error],
        }
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Set the excerpt
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Sort items by path for stable output.
    ///
    /// Only used by file listings; corpus-order commands must not re-sort,
    /// since line and token order is part of the contract.
    pub fn sort_by_path(&mut self) {
        self.items.sort_by(|a, b| a.path.cmp(&b.path));
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
