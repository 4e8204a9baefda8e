//! Generated blocks collision tests.
//!
//! The harness hashes random blocks of a fixed size and records the running collision
//! count at increasing key counts, for every hash function:
//!
//! ```json
//! { "Bits": 32, "Mask": 32, "Collisions": { "CityHash": { "65536": 0, "131072": 2 } } }
//! ```
//!
//! The block size is not part of the file; it is the name of the directory the file sits in.

use super::collisions_statistics::{CollisionsStatistics, RecordError, Result};
use super::ordered_map::OrderedMap;
use crate::charts::chart::LineChart;
use crate::constants::{FUNCTION_NAME_HEADER, LOG_PLOT_BASE, LOG_PLOT_MAX_TICKS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The JSON content of a generated blocks test.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedBlocksRecord {
    #[serde(flatten)]
    pub statistics: CollisionsStatistics<OrderedMap<u64>>,

    /// Number of low bits of each hash that were kept.
    #[serde(rename = "Mask")]
    pub mask: u32,
}

/// A generated blocks record together with the block size it was produced with.
#[derive(Debug, Clone)]
pub struct GeneratedBlocksStatistics {
    pub record: GeneratedBlocksRecord,
    /// Block size label, taken from the containing directory name.
    pub blocks_size: String,
}

/// Table rows; the first row is the header.
pub type CollisionTable = Vec<Vec<String>>;

impl GeneratedBlocksStatistics {
    pub fn new(record: GeneratedBlocksRecord, blocks_size: impl Into<String>) -> Self {
        Self {
            record,
            blocks_size: blocks_size.into(),
        }
    }

    pub fn bits(&self) -> u32 {
        self.record.statistics.bits
    }

    pub fn mask(&self) -> u32 {
        self.record.mask
    }

    /// `<tests_dir_path>/<block size>/<mask>`
    pub fn plot_dir(&self, tests_dir_path: &Path) -> PathBuf {
        tests_dir_path
            .join(&self.blocks_size)
            .join(self.mask().to_string())
    }

    /// Heading of this record's table in the report.
    pub fn table_heading(&self) -> String {
        format!(
            "{} bits ({} bits) with {} bytes block size",
            self.bits(),
            self.mask(),
            self.blocks_size
        )
    }

    /// `(key count, collisions)` points of one hash function, in document order.
    pub fn series(&self, hash_name: &str, counters: &OrderedMap<u64>) -> Result<Vec<(u64, u64)>> {
        counters
            .iter()
            .map(|(key, &collisions)| -> Result<(u64, u64)> {
                Ok((parse_key_count(hash_name, key)?, collisions))
            })
            .collect()
    }

    /// One log-log line chart per hash function, paired with its output file name.
    pub fn line_charts(&self) -> Result<Vec<(String, LineChart)>> {
        self.record.statistics.ensure_not_empty()?;

        self.record
            .statistics
            .collisions
            .iter()
            .map(|(hash_name, counters)| -> Result<(String, LineChart)> {
                let chart = LineChart {
                    title: hash_name.to_string(),
                    x_label: "Count keys".to_string(),
                    y_label: "Collisions".to_string(),
                    points: self.series(hash_name, counters)?,
                    log_base: LOG_PLOT_BASE,
                    max_ticks: LOG_PLOT_MAX_TICKS,
                };
                Ok((plot_file_name(hash_name, self.bits(), self.mask()), chart))
            })
            .collect()
    }

    /// Extracts the collisions as a table.
    ///
    /// The first row is `["Function name", k1, k2, ...]`, followed by one
    /// `[hash name, c1, c2, ...]` row per hash function. Every hash function must report
    /// the same key counts in the same order as the first one.
    pub fn collision_table(&self) -> Result<CollisionTable> {
        let collisions = &self.record.statistics.collisions;
        let (first_hash, first_counters) = collisions
            .iter()
            .next()
            .ok_or(RecordError::EmptyCollisions)?;

        let key_counts: Vec<u64> = self
            .series(first_hash, first_counters)?
            .into_iter()
            .map(|(key_count, _)| key_count)
            .collect();

        let mut header = Vec::with_capacity(key_counts.len() + 1);
        header.push(FUNCTION_NAME_HEADER.to_string());
        header.extend(key_counts.iter().map(u64::to_string));

        let mut table = Vec::with_capacity(collisions.len() + 1);
        table.push(header);

        for (hash_name, counters) in collisions.iter() {
            let series = self.series(hash_name, counters)?;
            if !series.iter().map(|(key, _)| *key).eq(key_counts.iter().copied()) {
                return Err(RecordError::MismatchedKeyCounts {
                    hash_name: hash_name.to_string(),
                    expected: join(key_counts.iter().copied()),
                    found: join(series.iter().map(|(key, _)| *key)),
                });
            }

            let mut row = Vec::with_capacity(series.len() + 1);
            row.push(hash_name.to_string());
            row.extend(series.iter().map(|(_, collisions)| collisions.to_string()));
            table.push(row);
        }

        Ok(table)
    }
}

/// File name of a hash function's plot.
///
/// The mask is only spelled out when it differs from the bit width.
pub fn plot_file_name(hash_name: &str, bits: u32, mask: u32) -> String {
    if bits != mask {
        format!("{hash_name} {bits} bits (mask {mask} bits) (log).png")
    } else {
        format!("{hash_name} {bits} bits (log).png")
    }
}

fn parse_key_count(hash_name: &str, key: &str) -> Result<u64> {
    key.trim()
        .parse()
        .map_err(|_| RecordError::InvalidKeyCount {
            hash_name: hash_name.to_string(),
            key: key.to_string(),
        })
}

fn join(values: impl Iterator<Item = u64>) -> String {
    values.map(|value| value.to_string()).collect::<Vec<_>>().join(", ")
}
