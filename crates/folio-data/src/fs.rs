//! Filesystem data source.

use std::path::{Path, PathBuf};

use crate::source::{DataSource, LoadError};

/// Site data document stored on the local filesystem.
///
/// The file is read again on every fetch.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|e| LoadError::unavailable(&self.location, e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::source::load_site_data;

    #[test]
    fn test_fetch_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.json");
        fs::write(&path, r#"{"person": {"name": "Ada"}}"#).unwrap();

        let data = load_site_data(&FileSource::new(&path)).unwrap();
        assert_eq!(data.person.name(), "Ada");
    }

    #[test]
    fn test_fetch_reads_fresh_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.json");
        let source = FileSource::new(&path);

        fs::write(&path, r#"{"person": {"name": "Ada"}}"#).unwrap();
        assert_eq!(load_site_data(&source).unwrap().person.name(), "Ada");

        fs::write(&path, r#"{"person": {"name": "Grace"}}"#).unwrap();
        assert_eq!(load_site_data(&source).unwrap().person.name(), "Grace");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("missing.json"));

        let err = load_site_data(&source).unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
        assert!(err.to_string().starts_with("Failed to load"));
        assert!(err.location().ends_with("missing.json"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_site_data(&FileSource::new(&path)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
