// src/io/elements.rs

use crate::model::ElementRecord;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level key holding the list of element entries.
pub const COLLECTION_KEY: &str = "elements";

/// Startup failure: without data there is nothing to look up.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Element data file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Could not read element data from {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Element data in {} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Element data in {} has no top-level `elements` list", path.display())]
    MissingCollection { path: PathBuf },

    #[error("Entry #{index} in {} is invalid: {reason}", path.display())]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}

/// Reads every element entry from a JSON file, in file order.
pub fn load(path: &Path) -> Result<Vec<ElementRecord>, DataLoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => DataLoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // File handle is dropped when this returns.
    from_reader(BufReader::new(file), path)
}

/// Parses element entries from any reader. `origin` only labels errors.
pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Vec<ElementRecord>, DataLoadError> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DataLoadError::Unreadable {
                path: origin.to_path_buf(),
                source: e.into(),
            }
        } else {
            DataLoadError::Malformed {
                path: origin.to_path_buf(),
                source: e,
            }
        }
    })?;

    let entries = match document {
        Value::Object(mut map) => match map.remove(COLLECTION_KEY) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(missing_collection(origin)),
        },
        _ => return Err(missing_collection(origin)),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(entry, index, origin))
        .collect()
}

fn parse_entry(entry: Value, index: usize, origin: &Path) -> Result<ElementRecord, DataLoadError> {
    let record: ElementRecord =
        serde_json::from_value(entry).map_err(|e| DataLoadError::InvalidEntry {
            path: origin.to_path_buf(),
            index,
            reason: e.to_string(),
        })?;

    // Odd but parseable entries are kept as-is
    if record.number == 0 {
        log::warn!("Entry #{} ('{}') has atomic number 0", index, record.name);
    }
    if record.name.trim().is_empty() {
        log::warn!("Entry #{} (Z={}) has an empty name and can never match", index, record.number);
    }

    Ok(record)
}

fn missing_collection(origin: &Path) -> DataLoadError {
    DataLoadError::MissingCollection {
        path: origin.to_path_buf(),
    }
}
