//! lexfreq - a CLI tool for word-frequency analysis of text files
//!
//! lexfreq provides:
//! - Discovery of .txt files in a directory
//! - Encoding sniffing from a 4-byte prefix (utf-8, utf-16)
//! - Corpus assembly and word tokenization
//! - Top-K word frequency reports
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod corpus;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
