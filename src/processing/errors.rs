use crate::charts::chart::PlotError;
use crate::report::document::ReportError;
use crate::statistics::collisions_statistics::RecordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while processing a report set
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl ProcessingError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub(crate) type Result<T> = core::result::Result<T, ProcessingError>;
