//! Log-log plots and collision tables for generated blocks tests.
//!
//! The input directory holds one subdirectory per block size:
//!
//! ```text
//! cpp/Generated blocks tests/<block size>/*.json
//! ```
//!
//! Every file yields one plot per hash function and one table in a shared report.

use super::batch::{for_each_entry, process_statistics, BatchSummary};
use super::errors::{ProcessingError, Result};
use crate::charts::chart::Chart;
use crate::constants::{COLLISION_TABLES_HEADING, GENERATED_BLOCKS_TEST_NAME, REPORT_FILE_NAME};
use crate::report::document::ReportDocument;
use crate::report::docx::DocxReport;
use crate::statistics::collisions_statistics::read_record;
use crate::statistics::generated_blocks::{GeneratedBlocksRecord, GeneratedBlocksStatistics};
use crate::utilities::io::entry_finder::EntryKind;
use crate::utilities::paths::{make_dir, ReportPaths};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of processing the generated blocks tests of a report set.
#[derive(Debug)]
pub struct GeneratedBlocksReport {
    pub summary: BatchSummary,
    /// The report as it was saved.
    pub report: DocxReport,
    pub report_path: PathBuf,
}

/// Plots the record in `<sub_dir_path>/<file_name>` and appends its table to `report`.
///
/// `sub_dir_name` is the block size the record was produced with. Plots are saved under
/// `<save_path>/<block size>/<mask>/`.
pub fn plot_graphics<R: ReportDocument>(
    sub_dir_path: &Path,
    sub_dir_name: &str,
    file_name: &str,
    report: &mut R,
    save_path: &Path,
    chart: &mut impl Chart,
) -> Result<()> {
    let record: GeneratedBlocksRecord = read_record(&sub_dir_path.join(file_name))?;
    let statistics = GeneratedBlocksStatistics::new(record, sub_dir_name);

    // Validate everything before anything is written.
    let line_charts = statistics.line_charts()?;
    let table = statistics.collision_table()?;

    let plot_dir = statistics.plot_dir(save_path);
    make_dir(&plot_dir).map_err(|e| ProcessingError::io(&plot_dir, e))?;

    for (plot_file_name, line_chart) in &line_charts {
        let output_path = plot_dir.join(plot_file_name);
        chart.line(line_chart, &output_path)?;
        debug!(path = %output_path.display(), points = line_chart.points.len(), "Saved plot");
    }

    report.add_table(&statistics.table_heading(), &table);

    info!(
        path = %plot_dir.display(),
        plots = line_charts.len(),
        "Processed {}",
        file_name
    );
    Ok(())
}

/// Processes every file of the block size directory `<root_path>/<sub_dir_name>`.
pub fn open_sub_dir<R: ReportDocument>(
    root_path: &Path,
    sub_dir_name: &str,
    report: &mut R,
    save_path: &Path,
    chart: &mut impl Chart,
) -> Result<BatchSummary> {
    let sub_dir_path = root_path.join(sub_dir_name);

    for_each_entry(&sub_dir_path, EntryKind::Files, |file_name| {
        plot_graphics(&sub_dir_path, sub_dir_name, file_name, report, save_path, chart)?;
        Ok(BatchSummary::one_processed())
    })
}

/// Processes `<cpp>/Generated blocks tests` into `<python>/Generated blocks tests`.
///
/// The report with one table per processed file is saved as `report.docx` in the output
/// directory, even if some files failed.
pub fn process_collision_statistics(
    paths: &ReportPaths,
    chart: &mut impl Chart,
) -> Result<GeneratedBlocksReport> {
    let tests_dir_path = paths.cpp_report_path().join(GENERATED_BLOCKS_TEST_NAME);
    let save_path = paths.python_report_path().join(GENERATED_BLOCKS_TEST_NAME);
    make_dir(&save_path).map_err(|e| ProcessingError::io(&save_path, e))?;

    let mut report = DocxReport::new(COLLISION_TABLES_HEADING);
    let summary = process_statistics(
        |root_path, sub_dir_name, report: &mut DocxReport, save_path| {
            open_sub_dir(root_path, sub_dir_name, report, save_path, chart)
        },
        &mut report,
        &tests_dir_path,
        EntryKind::Directories,
        &save_path,
    )?;

    Ok(GeneratedBlocksReport {
        summary,
        report,
        report_path: save_path.join(REPORT_FILE_NAME),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::collisions_statistics::RecordError;
    use crate::utilities::tests::fixtures::{report_paths, write_generated_blocks, write_raw};
    use crate::utilities::tests::recording_chart::RecordingChart;
    use std::fs::File;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    const TWO_HASHES: &str = r#"{
        "H": {"1": 0, "2": 1, "4": 3, "8": 10},
        "G": {"1": 0, "2": 0, "4": 1, "8": 2}
    }"#;

    fn document_xml(path: &Path) -> String {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn output_dir(paths: &ReportPaths) -> PathBuf {
        paths.python_report_path().join(GENERATED_BLOCKS_TEST_NAME)
    }

    #[test]
    fn plots_and_tables_per_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        write_generated_blocks(&paths, "1024", "32.json", 32, 32, TWO_HASHES);
        write_generated_blocks(&paths, "8", "32-16.json", 32, 16, TWO_HASHES);
        let mut chart = RecordingChart::default();

        let result = process_collision_statistics(&paths, &mut chart).unwrap();

        assert_eq!(result.summary.processed, 2);
        assert!(result.summary.is_success());
        assert_eq!(chart.lines.len(), 4);

        let output_dir = output_dir(&paths);
        assert!(output_dir.join("1024/32/H 32 bits (log).png").is_file());
        assert!(output_dir.join("1024/32/G 32 bits (log).png").is_file());
        assert!(output_dir
            .join("8/16/H 32 bits (mask 16 bits) (log).png")
            .is_file());

        let mut headings: Vec<_> = result
            .report
            .tables()
            .iter()
            .map(|table| table.heading.as_str())
            .collect();
        headings.sort();
        assert_eq!(
            headings,
            [
                "32 bits (16 bits) with 8 bytes block size",
                "32 bits (32 bits) with 1024 bytes block size",
            ]
        );
        for table in result.report.tables() {
            assert_eq!(table.rows.len(), 3);
            assert_eq!(table.rows[0].len(), 5);
        }

        assert_eq!(result.report_path, output_dir.join("report.docx"));
        let document = document_xml(&result.report_path);
        assert!(document.contains("Collision tables"));
        assert_eq!(document.matches("<w:tbl>").count(), 2);
    }

    #[test]
    fn charts_keep_document_order() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        write_generated_blocks(&paths, "64", "in.json", 32, 32, TWO_HASHES);
        let mut chart = RecordingChart::default();

        process_collision_statistics(&paths, &mut chart).unwrap();

        let titles: Vec<_> = chart.lines.iter().map(|(_, c)| c.title.as_str()).collect();
        assert_eq!(titles, ["H", "G"]);
        assert_eq!(chart.lines[0].1.points, [(1, 0), (2, 1), (4, 3), (8, 10)]);
    }

    #[test]
    fn empty_input_still_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        std::fs::create_dir_all(paths.cpp_report_path().join(GENERATED_BLOCKS_TEST_NAME))
            .unwrap();
        let mut chart = RecordingChart::default();

        let result = process_collision_statistics(&paths, &mut chart).unwrap();

        assert_eq!(result.summary.processed, 0);
        assert!(result.report.tables().is_empty());
        let document = document_xml(&result.report_path);
        assert!(document.contains("Collision tables"));
        assert!(!document.contains("<w:tbl>"));
    }

    #[test]
    fn mismatched_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        write_generated_blocks(&paths, "16", "good.json", 32, 32, TWO_HASHES);
        let bad = write_generated_blocks(
            &paths,
            "16",
            "bad.json",
            32,
            32,
            r#"{"H": {"1": 0, "2": 1}, "G": {"1": 0, "4": 1}}"#,
        );
        let mut chart = RecordingChart::default();

        let result = process_collision_statistics(&paths, &mut chart).unwrap();

        assert_eq!(result.summary.processed, 1);
        assert_eq!(result.summary.failures.len(), 1);
        assert_eq!(result.summary.failures[0].path, bad);
        assert!(matches!(
            &result.summary.failures[0].error,
            ProcessingError::Record(RecordError::MismatchedKeyCounts { hash_name, .. }) if hash_name == "G"
        ));

        // Nothing of the bad file is written.
        assert_eq!(chart.lines.len(), 2);
        assert_eq!(result.report.tables().len(), 1);
    }

    #[test]
    fn stray_files_in_root_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        write_generated_blocks(&paths, "16", "in.json", 32, 32, TWO_HASHES);
        write_raw(
            paths.cpp_report_path().join(GENERATED_BLOCKS_TEST_NAME),
            "notes.txt",
            "not a block size",
        );
        let mut chart = RecordingChart::default();

        let result = process_collision_statistics(&paths, &mut chart).unwrap();

        assert!(result.summary.is_success());
        assert_eq!(result.summary.processed, 1);
    }

    #[test]
    fn plot_graphics_appends_table() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        let input = write_generated_blocks(&paths, "1024", "in.json", 32, 16, TWO_HASHES);
        let save_path = temp_dir.path().join("out");
        let mut report = DocxReport::new(COLLISION_TABLES_HEADING);
        let mut chart = RecordingChart::default();

        plot_graphics(
            input.parent().unwrap(),
            "1024",
            "in.json",
            &mut report,
            &save_path,
            &mut chart,
        )
        .unwrap();

        assert_eq!(report.tables().len(), 1);
        assert_eq!(report.tables()[0].rows[1], ["H", "0", "1", "3", "10"]);
        assert!(save_path.join("1024").join("16").is_dir());
    }

    #[test]
    fn missing_input_dir_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = report_paths(&temp_dir);
        let mut chart = RecordingChart::default();

        let result = process_collision_statistics(&paths, &mut chart);
        assert!(matches!(result, Err(ProcessingError::Io { .. })));
    }
}
