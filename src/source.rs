use std::path::{Path, PathBuf};

use crate::error::{LocInspectError, Result};

/// A loaded source file: identity plus its immutable sequence of raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    name: String,
    lines: Vec<String>,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { path, name, lines }
    }

    /// Builds a file from raw text, splitting on `\n` and `\r\n`.
    #[must_use]
    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Self {
        Self::new(path, source.lines().map(str::to_string).collect())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown in reports and violation messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Loads source files from some backing store.
pub trait FileLoader {
    /// Load the file at `path`.
    ///
    /// # Errors
    /// Returns `FileAccess` if the path does not name a regular file, or
    /// `FileRead` if its content cannot be read as text.
    fn load(&self, path: &Path) -> Result<SourceFile>;
}

/// Loads files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl FileLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<SourceFile> {
        if !path.is_file() {
            return Err(LocInspectError::FileAccess {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| LocInspectError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(SourceFile::from_source(path, &content))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
