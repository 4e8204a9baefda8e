use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing a report document
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub(crate) type Result<T> = core::result::Result<T, ReportError>;

/// A document that collects headed tables and can be saved to disk.
pub trait ReportDocument {
    /// Appends a heading followed by a table with `rows`.
    ///
    /// The first row is the header. Rows are expected to all have the header's length.
    fn add_table(&mut self, heading: &str, rows: &[Vec<String>]);

    /// Writes the document to `path`, replacing any existing file.
    fn save(&self, path: &Path) -> Result<()>;
}
