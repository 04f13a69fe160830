//! File reading and decoding
//!
//! County exports are often `windows-1252` rather than UTF-8. Input bytes
//! are decoded with `encoding_rs` before anything reaches the CSV reader;
//! a byte-order mark overrides the requested encoding.

use super::glob_resolver::STDIN_MARKER;
use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with encoding-aware decoding
pub struct FileReader;

impl FileReader {
    /// Look up an encoding by its WHATWG label (`utf-8`, `latin1`, `windows-1252`, ...)
    pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            CliError::ConfigError(format!("unknown encoding '{label}'")).into()
        })
    }

    /// Read raw bytes from a file, or from stdin for `-`
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        if path == Path::new(STDIN_MARKER) {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Failed to read standard input")?;
            return Ok(buffer);
        }

        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Decode bytes, failing on malformed sequences
    pub fn decode(bytes: &[u8], encoding: &'static Encoding, source: &str) -> Result<String> {
        let (text, used, malformed) = encoding.decode(bytes);
        if malformed {
            return Err(CliError::EncodingError(format!(
                "{source} is not valid {}",
                used.name()
            ))
            .into());
        }
        if used != encoding {
            log::debug!("byte-order mark in {source} selects {}", used.name());
        }
        Ok(text.into_owned())
    }

    /// Read and decode a file as text
    pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
        let bytes = Self::read_bytes(path)?;
        Self::decode(&bytes, encoding, &path.display().to_string())
    }
}
