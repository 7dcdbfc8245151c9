//! Encoding sniffing by trial decoding
//!
//! Guesses a file's text encoding from its first few bytes by attempting
//! each candidate in order (utf-8, then utf-16) and taking the first that
//! decodes cleanly. Four bytes is an unreliable sample, so the full-file
//! decode can still fail later with a Decode error.

use anyhow::Result;
use std::fmt;
use std::path::Path;
use std::str;
use thiserror::Error;

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::paths::{make_relative, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::get_file_size;

/// Number of bytes sniffed from the start of each file
pub const SAMPLE_LEN: usize = 4;

/// A supported text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16,
}

impl Encoding {
    /// Candidate encodings in detection order. Order matters: utf-8 is
    /// attempted first, and the first successful decode wins.
    pub const CANDIDATES: [Encoding; 2] = [Encoding::Utf8, Encoding::Utf16];

    /// Stable label for output ("utf-8" / "utf-16")
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16 => "utf-16",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from encoding detection and decoding
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Neither candidate encoding decodes the byte sample
    #[error("could not detect the encoding of {path} from its first 4 bytes")]
    DetectionFailed { path: String },

    /// The detected encoding does not decode the full file content
    #[error("{path} did not decode as {encoding}")]
    Decode { path: String, encoding: Encoding },
}

/// Detect the encoding of a byte sample by trial decoding.
///
/// Returns `None` when no candidate matches. Never panics; decode failures
/// just move on to the next candidate.
pub fn detect_encoding(sample: &[u8]) -> Option<Encoding> {
    Encoding::CANDIDATES
        .into_iter()
        .find(|encoding| try_decode(sample, *encoding).is_some())
}

/// Decode bytes with the given encoding, returning `None` on failure
pub fn try_decode(bytes: &[u8], encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8 => str::from_utf8(bytes).ok().map(str::to_string),
        Encoding::Utf16 => decode_utf16(bytes),
    }
}

/// Decode UTF-16 bytes. A BOM selects the byte order and is stripped;
/// without a BOM, little-endian is assumed. Odd byte counts and unpaired
/// surrogates are decode failures.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (payload, big_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        _ => (bytes, false),
    };

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

/// Run the sniff command
pub fn run_sniff(root: &Path, file: &Path, config: RenderConfig) -> Result<()> {
    let full_path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };
    let relative =
        make_relative(&full_path, root).unwrap_or_else(|| normalize_path(file));

    let sample = crate::corpus::ingest::read_sample(&full_path)?;
    let encoding = detect_encoding(&sample).ok_or(EncodingError::DetectionFailed {
        path: relative.clone(),
    })?;

    let item = ResultItem::file(relative)
        .with_excerpt(encoding.as_str())
        .with_meta(Meta {
            encoding: Some(encoding.as_str().to_string()),
            size: get_file_size(&full_path).ok(),
            ..Default::default()
        });

    let mut result_set = ResultSet::new();
    result_set.push(item);

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
