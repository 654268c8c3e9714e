//! CSV ingestion with encoding auto-detection.
//!
//! Reads a testimonial export into JSON objects keyed by column header.
//! The dialect is fixed: comma-delimited, double-quoted per RFC 4180
//! (quoted fields may contain commas and line breaks). Legacy single-byte
//! encodings are decoded to UTF-8 before parsing.

use serde_json::{json, Map, Value};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records as JSON objects
    pub records: Vec<Value>,
    /// Column headers, in file order
    pub headers: Vec<String>,
    /// Detected encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown charsets fall back to lossy UTF-8 so a stray byte never
/// aborts the whole file.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Parse a CSV file with encoding auto-detection.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file("testimonials.csv")?;
/// println!("Encoding: {}", result.encoding);
/// println!("Records: {}", result.records.len());
/// ```
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes)
}

/// Parse CSV bytes with encoding auto-detection.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    // UTF-8 BOM would otherwise end up glued to the first header
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(bytes);

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);

    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    parse_str(&content, encoding)
}

/// Parse decoded CSV text into records keyed by header.
///
/// Headers are taken verbatim from the first row so the output file can
/// reproduce them byte for byte. Rows shorter than the header are padded
/// with empty strings; extra fields are ignored.
fn parse_str(content: &str, encoding: String) -> CsvResult<ParseResult> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let mut obj = Map::new();

        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).unwrap_or("");
            obj.insert(header.clone(), json!(value));
        }

        records.push(Value::Object(obj));
    }

    Ok(ParseResult {
        records,
        headers,
        encoding,
    })
}
