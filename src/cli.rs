//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::corpus::freq::DEFAULT_TOP_K;

/// lexfreq - word-frequency analysis for directories of text files.
#[derive(Parser, Debug)]
#[command(name = "lexfreq")]
#[command(
    author,
    version,
    about,
    long_about = r#"lexfreq ingests the .txt files in a directory and reports word frequencies.

Each pipeline stage is its own command, and every command prints a ResultSet
in the selected format (default: jsonl).

Pipeline stages:
- scan:   list candidate .txt files (one directory level)
- sniff:  detect a file's encoding from its first 4 bytes (utf-8, utf-16)
- ingest: decode files and assemble the ordered line corpus
- tokens: tokenize each corpus line into lowercase words
- report: count tokens and print the top-K words

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- raw: excerpts only (unstable; intended for debugging)

Examples:
    lexfreq scan
    lexfreq sniff notes.txt
    lexfreq report --top 5 --format md
"#
)]
pub struct Cli {
    /// Root directory containing the .txt files to analyze.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory containing the .txt files to analyze (defaults to the\n\
current directory).\n\n\
Only files directly inside ROOT are considered; subdirectories are not\n\
searched. All paths emitted in results are relative to this root."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
This is useful when manually inspecting results. Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List candidate .txt files under ROOT.
    #[command(
        long_about = "List the .txt files directly inside ROOT and emit one ResultItem per\n\
file with size and mtime metadata. Output is sorted by name for stability.\n\n\
The listing is one level deep: subdirectories are not searched, and hidden\n\
files are skipped. Ignore rules (.gitignore) are not applied.\n\n\
Example:\n\
  lexfreq scan\n"
    )]
    Scan,

    /// Detect a file's encoding from its first 4 bytes.
    #[command(
        long_about = "Read the first 4 bytes of FILE and try to decode them as utf-8, then\n\
utf-16; the first candidate that decodes cleanly wins.\n\n\
On success the detected label is emitted in the result metadata. If neither\n\
candidate matches, the command fails with a detection error.\n\n\
Note that 4 bytes is a heuristic sample: the detected encoding can still\n\
fail on the full file during ingest.\n\n\
Examples:\n\
  lexfreq sniff notes.txt\n\
  lexfreq sniff subdir/other.txt --format md\n"
    )]
    Sniff {
        /// File to sniff (relative to ROOT unless absolute).
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Decode all .txt files and emit the ordered line corpus.
    #[command(
        long_about = "Run discovery and sniffing, decode each file with its detected encoding,\n\
and split contents on '\\n' into lines.\n\n\
Emits one file item per source (with encoding, hash and line-count\n\
metadata) followed by one line item per corpus line, in file order then\n\
line order. A file ending in a newline contributes a trailing empty line.\n\n\
Any undetectable or wrongly detected encoding aborts the whole run; there\n\
is no per-file isolation.\n\n\
Example:\n\
  lexfreq ingest --format md\n"
    )]
    Ingest,

    /// Tokenize each corpus line into lowercase words.
    #[command(
        long_about = "Ingest the corpus, then tokenize each line: keep only alphabetic and\n\
whitespace characters (lowercasing as they are kept) and split on the\n\
single space character.\n\n\
Emits one tokens item per corpus line carrying the token list as\n\
structured data. Consecutive spaces produce empty tokens; this is part of\n\
the tokenizer contract, not a bug.\n\n\
Example:\n\
  lexfreq tokens\n"
    )]
    Tokens,

    /// Report the most frequent words across the corpus.
    #[command(
        long_about = "Run the full pipeline: discover, sniff, decode, tokenize, count.\n\n\
Emits one word item per ranked word with {word, count, rank} data, count\n\
descending, ties broken by first occurrence in the corpus. No stop-word\n\
filtering is applied, so the top of the list is usually stop-words.\n\n\
Examples:\n\
  lexfreq report\n\
  lexfreq report --top 10 --format md\n"
    )]
    Report {
        /// Number of words to report.
        #[arg(long, default_value_t = DEFAULT_TOP_K, value_name = "N")]
        top: usize,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Scan => crate::corpus::ingest::run_scan(&root, render_config),

        Commands::Sniff { file } => crate::corpus::encoding::run_sniff(&root, &file, render_config),

        Commands::Ingest => crate::corpus::ingest::run_ingest(&root, render_config),

        Commands::Tokens => crate::corpus::tokenize::run_tokens(&root, render_config),

        Commands::Report { top } => crate::corpus::freq::run_report(&root, top, render_config),
    }
}
