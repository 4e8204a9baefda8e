//! The part of a collision report shared by every test kind.
//!
//! Every JSON file written by the harness carries the tested bit width (`Bits`) and a
//! `Collisions` object. What the collisions map to depends on the test, so the record is
//! generic over the value type and the test specific records flatten it into themselves.

use super::ordered_map::OrderedMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a collision record
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Covers malformed JSON as well as missing `Bits`/`Collisions`/variant fields.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("The record has no collisions")]
    EmptyCollisions,

    #[error("Hash function '{hash_name}' has key count '{key}', which is not a number")]
    InvalidKeyCount { hash_name: String, key: String },

    #[error("Hash function '{hash_name}' reports key counts [{found}], expected [{expected}]")]
    MismatchedKeyCounts {
        hash_name: String,
        expected: String,
        found: String,
    },
}

pub(crate) type Result<T> = core::result::Result<T, RecordError>;

/// Bit width and collision mapping of a single test run.
#[derive(Debug, Clone, Deserialize)]
pub struct CollisionsStatistics<V> {
    /// Bit width of the hashes in this test.
    #[serde(rename = "Bits")]
    pub bits: u32,

    /// Hash function name to collision data, in the order the harness wrote them.
    #[serde(rename = "Collisions")]
    pub collisions: OrderedMap<V>,
}

impl<V> CollisionsStatistics<V> {
    /// Fails with [`RecordError::EmptyCollisions`] if there is nothing to draw.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.collisions.is_empty() {
            return Err(RecordError::EmptyCollisions);
        }

        Ok(())
    }
}

/// Reads one JSON record from disk.
///
/// The file is opened, parsed and closed within this call.
///
/// # Arguments
/// * `file_path` - Path to the JSON file written by the harness
///
/// # Returns
/// * `Ok(T)` - The parsed record
/// * `Err(RecordError)` - If the file could not be read or is not a valid record
pub fn read_record<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let file = File::open(file_path)?;
    let record = serde_json::from_reader(BufReader::new(file))?;
    Ok(record)
}
