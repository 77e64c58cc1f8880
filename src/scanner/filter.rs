use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LocInspectError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with `.<ext>` for a configured extension and
/// that no exclude glob matches.
pub struct SourceFilter {
    suffixes: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    /// Extensions may be given with or without the leading dot.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LocInspectError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LocInspectError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let suffixes = extensions
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect();

        Ok(Self {
            suffixes,
            exclude_patterns,
        })
    }

    fn has_source_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_source_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
