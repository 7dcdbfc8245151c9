//! File ingestion: discovery, sniffing, full decode, corpus assembly
//!
//! Lists .txt files directly inside a directory (one level, like the
//! original glob), sniffs each file's encoding from its first four bytes,
//! then decodes the whole file and splits it into lines. One bad file
//! aborts the whole ingestion; there is no per-file isolation.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::paths::{make_relative, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{get_file_size, get_mtime_ms, hash_bytes};
use crate::corpus::encoding::{detect_encoding, try_decode, Encoding, EncodingError, SAMPLE_LEN};

/// A fully ingested source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to root, using '/' as separator
    pub path: String,
    /// Detected encoding
    pub encoding: Encoding,
    /// Full decoded content
    pub content: String,
    /// Content split on '\n'. A trailing empty line is kept when the file
    /// ends with a newline.
    pub lines: Vec<String>,
    /// Raw size in bytes
    pub size: u64,
    /// Modification time in milliseconds since epoch
    pub mtime_ms: Option<i64>,
    /// XXH3 hash of the raw bytes
    pub hash: String,
}

impl SourceFile {
    /// Build the file-level metadata for result items
    pub fn meta(&self) -> Meta {
        Meta {
            mtime_ms: self.mtime_ms,
            size: Some(self.size),
            hash: Some(self.hash.clone()),
            encoding: Some(self.encoding.as_str().to_string()),
            lines: Some(self.lines.len()),
        }
    }
}

/// List .txt files directly inside `root`, sorted by name.
///
/// One directory level only. Hidden files are skipped; ignore rules
/// (.gitignore and friends) are not applied.
pub fn list_txt_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .max_depth(Some(1))
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Read the first SAMPLE_LEN bytes of a file (fewer for shorter files)
pub fn read_sample(path: &Path) -> Result<Vec<u8>> {
    let file = fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let mut sample = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64)
        .read_to_end(&mut sample)
        .with_context(|| format!("Failed to read sample from: {:?}", path))?;
    Ok(sample)
}

/// Ingest all .txt files under `root`, in listing order.
///
/// Each file is opened, fully read, and closed before the next one. An
/// undetectable or wrongly detected encoding aborts the run.
pub fn ingest(root: &Path) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for path in list_txt_files(root)? {
        let relative = make_relative(&path, root).unwrap_or_else(|| normalize_path(&path));

        let sample = read_sample(&path)?;
        let encoding = detect_encoding(&sample).ok_or(EncodingError::DetectionFailed {
            path: relative.clone(),
        })?;

        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read file: {:?}", path))?;
        let content = try_decode(&bytes, encoding).ok_or(EncodingError::Decode {
            path: relative.clone(),
            encoding,
        })?;

        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();

        sources.push(SourceFile {
            path: relative,
            encoding,
            size: bytes.len() as u64,
            mtime_ms: get_mtime_ms(&path).ok(),
            hash: hash_bytes(&bytes),
            content,
            lines,
        });
    }

    Ok(sources)
}

/// Flatten ingested files into one ordered corpus of lines
pub fn corpus(sources: &[SourceFile]) -> Vec<String> {
    sources
        .iter()
        .flat_map(|source| source.lines.iter().cloned())
        .collect()
}

/// Run the scan command
pub fn run_scan(root: &Path, config: RenderConfig) -> Result<()> {
    let mut result_set = ResultSet::new();

    for path in list_txt_files(root)? {
        let relative = make_relative(&path, root).unwrap_or_else(|| normalize_path(&path));
        let mut meta = Meta::default();
        if let Ok(size) = get_file_size(&path) {
            meta.size = Some(size);
        }
        if let Ok(mtime) = get_mtime_ms(&path) {
            meta.mtime_ms = Some(mtime);
        }
        result_set.push(ResultItem::file(relative).with_meta(meta));
    }

    result_set.sort_by_path();

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

/// Run the ingest command
pub fn run_ingest(root: &Path, config: RenderConfig) -> Result<()> {
    let sources = ingest(root)?;

    let mut result_set = ResultSet::new();
    for source in &sources {
        result_set.push(
            ResultItem::file(source.path.clone())
                .with_excerpt(source.content.clone())
                .with_meta(source.meta()),
        );
    }
    for source in &sources {
        for line in &source.lines {
            result_set.push(ResultItem::line(source.path.clone(), line.clone()));
        }
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
