//! Corpus pipeline: encoding sniffing, file ingestion, tokenization,
//! and word-frequency reporting

pub mod encoding;
pub mod freq;
pub mod ingest;
pub mod tokenize;
