use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Parse a single non-negative integer token. Anything that isn't one
/// (".", "", "-1", "abc", overflow) comes back as `None`.
pub fn parse_count(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok()
}

///
/// Split a delimited list of integers, keeping a slot for every token.
///
/// Tokens that can't be parsed are kept as `None` so positions stay aligned
/// with the source list. An empty string yields an empty vector, and a single
/// trailing delimiter does not start another token.
///
/// # Arguments
///
/// - s: the delimited string, e.g. `"3_4_5"`
/// - delim: the delimiter, e.g. `'_'`
///
pub fn split_counts(s: &str, delim: char) -> Vec<Option<u32>> {
    if s.is_empty() {
        return Vec::new();
    }
    let s = s.strip_suffix(delim).unwrap_or(s);
    s.split(delim).map(parse_count).collect()
}

/// Split a delimited list of strings, treating an empty field as no values.
/// A single trailing delimiter is ignored.
pub fn split_fields(s: &str, delim: char) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    let s = s.strip_suffix(delim).unwrap_or(s);
    s.split(delim).map(|p| p.to_string()).collect()
}

/// Render an optional value, using `.` for anything missing.
pub fn render_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => crate::consts::MISSING_VALUE.to_string(),
    }
}
