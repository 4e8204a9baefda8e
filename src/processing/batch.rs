//! Directory driven batch processing.
//!
//! A batch walks the immediate entries of a directory and hands each one to a callback.
//! A failing entry is logged and recorded, then the batch moves on to the next one.

use super::errors::{ProcessingError, Result};
use crate::constants::REPORT_FILE_NAME;
use crate::report::document::ReportDocument;
use crate::utilities::io::entry_finder::{list_entries, EntryKind};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An entry that could not be processed.
#[derive(Debug)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub error: ProcessingError,
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of entries processed successfully.
    pub processed: usize,
    pub failures: Vec<EntryFailure>,
}

impl BatchSummary {
    /// Summary of a single successful entry.
    pub fn one_processed() -> Self {
        Self {
            processed: 1,
            failures: Vec::new(),
        }
    }

    /// Adds the results of a nested batch to this one.
    pub fn merge(&mut self, other: BatchSummary) {
        self.processed += other.processed;
        self.failures.extend(other.failures);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Calls `callback` with the name of every entry of `kind` in `root_path`.
///
/// A callback error is logged with the entry's path and recorded as a failure. Failing to
/// list `root_path` itself is returned as an error.
pub fn for_each_entry<F>(root_path: &Path, kind: EntryKind, mut callback: F) -> Result<BatchSummary>
where
    F: FnMut(&str) -> Result<BatchSummary>,
{
    let mut summary = BatchSummary::default();

    for name in list_entries(root_path, kind)? {
        match callback(&name) {
            Ok(entry_summary) => summary.merge(entry_summary),
            Err(error) => {
                let path = root_path.join(&name);
                warn!(path = %path.display(), %error, "Failed to process entry");
                summary.failures.push(EntryFailure { path, error });
            }
        }
    }

    Ok(summary)
}

/// Runs `callback` over the entries of `root_path`, then saves `report` to
/// `<save_path>/report.docx`.
///
/// The callback receives the root path, the entry name, the report to append tables to and
/// the save path. The report is saved even when some entries failed, or there were none.
pub fn process_statistics<R, F>(
    mut callback: F,
    report: &mut R,
    root_path: &Path,
    kind: EntryKind,
    save_path: &Path,
) -> Result<BatchSummary>
where
    R: ReportDocument,
    F: FnMut(&Path, &str, &mut R, &Path) -> Result<BatchSummary>,
{
    let summary = for_each_entry(root_path, kind, |name| {
        callback(root_path, name, report, save_path)
    })?;

    let report_path = save_path.join(REPORT_FILE_NAME);
    report.save(&report_path)?;

    info!(
        path = %report_path.display(),
        processed = summary.processed,
        failed = summary.failures.len(),
        "Saved report"
    );
    Ok(summary)
}
