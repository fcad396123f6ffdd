//! Export loader: file bytes to raw CSV rows

use anyhow::{Context, Result};
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// An export line split into fields, exactly as tokenized.
pub type RawRow = Vec<String>;

/// Read an eBay export from disk and split it into rows.
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let text = decode_export(&bytes);
    parse_raw_rows(&text)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))
}

/// Same as [`load_raw_rows`], behind a spinner.
pub fn load_raw_rows_with_progress(path: &Path) -> Result<Vec<RawRow>> {
    let spinner = create_spinner(&format!("Reading {}...", path.display()));
    let rows = load_raw_rows(path)?;
    finish_with_success(&spinner, &format!("Read {} line(s)", rows.len()));
    Ok(rows)
}

/// Decode export bytes as UTF-8, falling back to Windows-1252.
///
/// eBay UK downloads are often Windows-1252 (the `£` sign is a single 0xA3 byte).
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_export(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
    }
}

/// Tokenize CSV text into rows. Row widths may vary; nothing is treated as a header.
pub fn parse_raw_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error at line {}", idx + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
