//! Fixed bucket collision tests.
//!
//! One JSON file per bit width, mapping every hash function to its collision count:
//!
//! ```json
//! { "Test name": "Words tests", "Bits": 16, "Collisions": { "CityHash": 1912, "xxHash": 1890 } }
//! ```

use super::collisions_statistics::{CollisionsStatistics, Result};
use crate::charts::chart::{Bar, BarChart, YAxisLayout};
use crate::constants::{CROWDED_LABELS_BITS, CROWDED_LABEL_ROTATION};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A fixed bucket test record.
#[derive(Debug, Clone, Deserialize)]
pub struct DataCollisionsStatistics {
    #[serde(flatten)]
    pub statistics: CollisionsStatistics<u64>,

    /// Name of the test; also the name of the output directory.
    #[serde(rename = "Test name")]
    pub test_name: String,
}

impl DataCollisionsStatistics {
    /// Bit width of the hashes in this test.
    pub fn bits(&self) -> u32 {
        self.statistics.bits
    }

    /// Directory receiving this test's histograms, under `python_report_path`.
    pub fn histogram_dir(&self, python_report_path: &Path) -> PathBuf {
        python_report_path.join(&self.test_name)
    }

    /// File name of this record's histogram.
    pub fn histogram_file_name(&self) -> String {
        format!("{} bits.png", self.bits())
    }

    /// Rotation of the bar value labels, in degrees.
    ///
    /// 16 bit tests produce large counts on narrow bars, so their labels are tilted to
    /// keep them apart.
    pub fn label_rotation(&self) -> f64 {
        if self.bits() == CROWDED_LABELS_BITS {
            CROWDED_LABEL_ROTATION
        } else {
            0.0
        }
    }

    /// Describes the histogram of collisions per hash function.
    pub fn histogram(&self) -> Result<BarChart> {
        self.statistics.ensure_not_empty()?;

        let bars: Vec<Bar> = self
            .statistics
            .collisions
            .iter()
            .map(|(hash_name, &count)| Bar {
                label: hash_name.to_string(),
                height: count,
            })
            .collect();

        let max_height = bars.iter().map(|bar| bar.height).max().unwrap_or(0);

        Ok(BarChart {
            title: format!("{} bits hashes", self.bits()),
            x_label: "Hash name".to_string(),
            y_label: "Collisions".to_string(),
            bars,
            label_rotation: self.label_rotation(),
            y_axis: YAxisLayout::for_max_height(max_height),
        })
    }
}
