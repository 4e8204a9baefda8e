//! Histograms for fixed bucket tests.

use super::batch::{for_each_entry, BatchSummary};
use super::errors::{ProcessingError, Result};
use crate::charts::chart::Chart;
use crate::statistics::collisions_statistics::read_record;
use crate::statistics::data_collisions::DataCollisionsStatistics;
use crate::utilities::io::entry_finder::EntryKind;
use crate::utilities::paths::{make_dir, ReportPaths};
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders the histogram of the record in `<dir_path>/<file_name>`.
///
/// The image is saved to `<python>/<test name>/<bits> bits.png`; both directories are created
/// if missing. Returns the path of the saved image.
pub fn create_histogram(
    paths: &ReportPaths,
    dir_path: &Path,
    file_name: &str,
    chart: &mut impl Chart,
) -> Result<PathBuf> {
    let statistics: DataCollisionsStatistics = read_record(&dir_path.join(file_name))?;
    let histogram = statistics.histogram()?;

    let python_report_path = paths.python_report_path();
    make_dir(&python_report_path).map_err(|e| ProcessingError::io(&python_report_path, e))?;

    let histogram_dir = statistics.histogram_dir(&python_report_path);
    make_dir(&histogram_dir).map_err(|e| ProcessingError::io(&histogram_dir, e))?;

    let output_path = histogram_dir.join(statistics.histogram_file_name());
    chart.bar(&histogram, &output_path)?;

    info!(path = %output_path.display(), "Saved histogram");
    Ok(output_path)
}

/// Renders one histogram per file in `<cpp>/<test_name>`.
///
/// Files that fail to parse or render are recorded in the returned summary.
pub fn process_collision_statistics(
    paths: &ReportPaths,
    test_name: &str,
    chart: &mut impl Chart,
) -> Result<BatchSummary> {
    let tests_dir_path = paths.cpp_report_path().join(test_name);

    for_each_entry(&tests_dir_path, EntryKind::Files, |file_name| {
        create_histogram(paths, &tests_dir_path, file_name, chart)?;
        Ok(BatchSummary::one_processed())
    })
}
