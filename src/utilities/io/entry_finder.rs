use crate::processing::errors::{ProcessingError, Result};
use std::fs::read_dir;
use std::path::Path;

/// Kind of directory entry to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Files,
    Directories,
}

impl EntryKind {
    fn matches(self, file_type: std::fs::FileType) -> bool {
        match self {
            EntryKind::Files => file_type.is_file(),
            EntryKind::Directories => file_type.is_dir(),
        }
    }
}

/// Lists the names of the immediate entries of `directory_path` that are of `kind`.
///
/// Names are returned in directory listing order and are not recursed into.
/// Non UTF-8 names are converted lossily.
///
/// # Errors
///
/// Returns an error naming the directory if it cannot be read.
pub fn list_entries(directory_path: &Path, kind: EntryKind) -> Result<Vec<String>> {
    let to_error = |e| ProcessingError::io(directory_path, e);

    let mut names = Vec::new();
    for entry in read_dir(directory_path).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        let file_type = entry.file_type().map_err(to_error)?;

        if kind.matches(file_type) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn populated_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path();
        create_dir(base_path.join("1024")).unwrap();
        create_dir(base_path.join("8")).unwrap();

        let mut file1 = File::create(base_path.join("16 bits.json")).unwrap();
        write!(file1, "{{}}").unwrap();
        File::create(base_path.join("1024/32 bits.json")).unwrap();

        temp_dir
    }

    #[test]
    fn lists_files_only() {
        let temp_dir = populated_dir();

        let files = list_entries(temp_dir.path(), EntryKind::Files).unwrap();
        assert_eq!(files, ["16 bits.json"]);
    }

    #[test]
    fn lists_directories_only() {
        let temp_dir = populated_dir();

        let mut dirs = list_entries(temp_dir.path(), EntryKind::Directories).unwrap();
        dirs.sort();
        assert_eq!(dirs, ["1024", "8"]);
    }

    #[test]
    fn handles_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_entries(temp_dir.path(), EntryKind::Files)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn missing_directory_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        match list_entries(&missing, EntryKind::Files) {
            Err(ProcessingError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
