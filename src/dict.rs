//! Plover dictionary files: word lists and JSON load/save

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// A Plover dictionary: steno key -> output text, in meaningful order.
///
/// `serde_json::Map` keeps insertion order (the `preserve_order` feature),
/// which is what makes sorted output survive a save/load round trip.
pub type Dictionary = serde_json::Map<String, serde_json::Value>;

/// Dictionary file errors
#[derive(Debug)]
pub enum DictError {
    /// File read/write failure
    IoError(std::io::Error),
    /// JSON parse or serialize failure
    ParseError(String),
}

impl std::fmt::Display for DictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictError::IoError(e) => write!(f, "file error: {}", e),
            DictError::ParseError(s) => write!(f, "JSON error: {}", s),
        }
    }
}

impl std::error::Error for DictError {}

impl From<std::io::Error> for DictError {
    fn from(e: std::io::Error) -> Self {
        DictError::IoError(e)
    }
}

/// Reads the lines of a word-list file, skipping blank lines.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads a Plover dictionary from a JSON file.
pub fn read_dict<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| DictError::ParseError(e.to_string()))
}

/// Saves a Plover dictionary as JSON.
///
/// One entry per line with no indentation, UTF-8 throughout (no ASCII
/// escaping), matching the format Plover itself writes.
pub fn save_dict<P: AsRef<Path>>(path: P, dictionary: &Dictionary) -> Result<(), DictError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    dictionary
        .serialize(&mut serializer)
        .map_err(|e| DictError::ParseError(e.to_string()))?;

    writer.flush()?;
    Ok(())
}
