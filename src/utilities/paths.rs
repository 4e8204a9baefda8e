//! Report set directory layout.
//!
//! ```text
//! reports/<report set>/cpp/...      JSON written by the harness
//! reports/<report set>/python/...   charts and documents written here
//! ```

use crate::constants::{CPP_REPORT_DIR, PYTHON_REPORT_DIR, REPORTS_ROOT_DIR};
use std::path::{Path, PathBuf};

/// Locates the input and output directories of one report set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    reports_root: PathBuf,
    reports_dir_name: String,
}

impl ReportPaths {
    /// Paths of `reports_dir_name` under the default `reports` directory.
    pub fn new(reports_dir_name: impl Into<String>) -> Self {
        Self::with_root(REPORTS_ROOT_DIR, reports_dir_name)
    }

    /// Paths of `reports_dir_name` under a custom reports directory.
    pub fn with_root(reports_root: impl Into<PathBuf>, reports_dir_name: impl Into<String>) -> Self {
        Self {
            reports_root: reports_root.into(),
            reports_dir_name: reports_dir_name.into(),
        }
    }

    /// Name of the report set.
    pub fn reports_dir_name(&self) -> &str {
        &self.reports_dir_name
    }

    /// `<root>/<report set>`
    pub fn reports_path(&self) -> PathBuf {
        self.reports_root.join(&self.reports_dir_name)
    }

    /// `<root>/<report set>/cpp`
    pub fn cpp_report_path(&self) -> PathBuf {
        self.reports_path().join(CPP_REPORT_DIR)
    }

    /// `<root>/<report set>/python`
    pub fn python_report_path(&self) -> PathBuf {
        self.reports_path().join(PYTHON_REPORT_DIR)
    }
}

/// Creates a directory (and its parents) unless it already exists.
///
/// Calling this on an existing directory is a no-op and leaves its contents alone.
pub fn make_dir(path_to_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path_to_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_layout() {
        let paths = ReportPaths::new("run-1");

        assert_eq!(paths.reports_path(), Path::new("reports").join("run-1"));
        assert_eq!(
            paths.cpp_report_path(),
            Path::new("reports").join("run-1").join("cpp")
        );
        assert_eq!(
            paths.python_report_path(),
            Path::new("reports").join("run-1").join("python")
        );
        assert_eq!(paths.reports_dir_name(), "run-1");
    }

    #[test]
    fn custom_root() {
        let paths = ReportPaths::with_root("/tmp/out", "set");
        assert_eq!(paths.cpp_report_path(), Path::new("/tmp/out/set/cpp"));
    }

    #[test]
    fn make_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("python");

        make_dir(&dir).unwrap();
        fs::write(dir.join("16 bits.png"), b"keep me").unwrap();
        make_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read(dir.join("16 bits.png")).unwrap(), b"keep me");
    }

    #[test]
    fn make_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");

        make_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn make_dir_over_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        fs::write(&file, b"").unwrap();

        assert!(make_dir(&file).is_err());
    }
}
