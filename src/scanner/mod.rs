mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in a stable order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
