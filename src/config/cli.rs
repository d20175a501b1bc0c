use crate::core::SnippetSource;
use crate::utils::error::{MatrixError, Result};
use std::fs;
use std::path::Path;

/// Filesystem-backed snippet source listing immediate subdirectories.
#[derive(Debug, Clone)]
pub struct LocalSnippetDir {
    base_path: String,
}

impl LocalSnippetDir {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl SnippetSource for LocalSnippetDir {
    fn list_dirs(&self) -> Result<Vec<String>> {
        let root = Path::new(&self.base_path);
        if !root.is_dir() {
            return Err(MatrixError::DirectoryNotFound {
                path: self.base_path.clone(),
            });
        }

        let entries = fs::read_dir(root).map_err(|_| MatrixError::DirectoryNotFound {
            path: self.base_path.clone(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            // Non-UTF-8 directory names cannot match the slot grammar.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(names)
    }

    fn location(&self) -> &str {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_not_found() {
        let err = LocalSnippetDir::new("does/not/exist").list_dirs().unwrap_err();
        assert!(matches!(err, MatrixError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_lists_only_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Slot0_Alpha")).unwrap();
        fs::create_dir(temp.path().join("notes")).unwrap();
        fs::write(temp.path().join("Slot1_File"), b"not a dir").unwrap();

        let source = LocalSnippetDir::new(temp.path().to_str().unwrap());
        let mut names = source.list_dirs().unwrap();
        names.sort();

        assert_eq!(names, vec!["Slot0_Alpha", "notes"]);
    }

    #[test]
    fn test_location_reports_the_configured_path() {
        let source = LocalSnippetDir::new("config/snippets");
        assert_eq!(source.location(), "config/snippets");
    }
}
