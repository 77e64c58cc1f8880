use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::checker::StyleViolation;
use crate::classifier::ConstructClassifier;
use crate::counter::{LineCounter, LogicalLineCounter, MethodLineCounter, PhysicalLineCounter};
use crate::error::LocInspectError;
use crate::source::SourceFile;

use super::class::{ClassAnalyzer, ClassScope};
use super::types::{ClassRecord, FileMetrics};

/// Runs every counter over one accepted file.
pub struct FileAnalyzer<'a> {
    classifier: &'a ConstructClassifier,
    classes: ClassAnalyzer<'a>,
}

impl<'a> FileAnalyzer<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier, scope: ClassScope) -> Self {
        Self {
            classifier,
            classes: ClassAnalyzer::new(classifier, scope),
        }
    }

    #[must_use]
    pub fn analyze(&self, file: &SourceFile) -> FileMetrics {
        let metrics = FileMetrics {
            path: file.path().to_path_buf(),
            name: file.name().to_string(),
            physical_lines: PhysicalLineCounter::new(self.classifier).count(file),
            logical_lines: LogicalLineCounter::new(self.classifier).count(file),
            method_count: MethodLineCounter::new(self.classifier).count(file),
            classes: self.classes.analyze(file),
        };
        debug!(
            file = %metrics.name,
            physical = metrics.physical_lines,
            logical = metrics.logical_lines,
            methods = metrics.method_count,
            classes = metrics.classes.len(),
            "Counted file"
        );
        metrics
    }
}

/// Why a file contributed nothing to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FileFailure {
    /// The file could not be loaded.
    Unreadable { path: PathBuf, message: String },
    /// The file broke at least one style rule.
    Rejected {
        path: PathBuf,
        violations: Vec<StyleViolation>,
    },
}

impl FileFailure {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::Rejected { path, .. } => path,
        }
    }

    /// One report line per problem.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Unreadable { message, .. } => vec![format!("Error: {message}")],
            Self::Rejected { violations, .. } => {
                violations.iter().map(ToString::to_string).collect()
            }
        }
    }
}

/// Accumulates per-file results for one analysed directory.
#[derive(Debug)]
pub struct MetricsAggregator {
    program_name: String,
    files: Vec<FileMetrics>,
    failures: Vec<FileFailure>,
}

impl MetricsAggregator {
    #[must_use]
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_file(&mut self, metrics: FileMetrics) {
        self.files.push(metrics);
    }

    /// Records a file that was skipped. Style violations become `Rejected`,
    /// anything else `Unreadable`.
    pub fn add_failure(&mut self, path: impl Into<PathBuf>, error: LocInspectError) {
        let path = path.into();
        let failure = match error {
            LocInspectError::FormatViolation(violations) => FileFailure::Rejected { path, violations },
            other => FileFailure::Unreadable {
                path,
                message: other.to_string(),
            },
        };
        self.failures.push(failure);
    }

    #[must_use]
    pub fn finish(self) -> ProjectReport {
        let total_physical_lines = self.files.iter().map(|f| f.physical_lines).sum();
        let total_logical_lines = self.files.iter().map(|f| f.logical_lines).sum();
        ProjectReport {
            program_name: self.program_name,
            total_physical_lines,
            total_logical_lines,
            files: self.files,
            failures: self.failures,
        }
    }
}

/// Result of analysing one directory. Totals cover accepted files only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub program_name: String,
    pub total_physical_lines: usize,
    pub total_logical_lines: usize,
    pub files: Vec<FileMetrics>,
    pub failures: Vec<FileFailure>,
}

impl ProjectReport {
    /// Every class record, in scan order then declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.files.iter().flat_map(|file| file.classes.iter())
    }

    #[must_use]
    pub fn total_methods(&self) -> usize {
        self.files.iter().map(|f| f.method_count).sum()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
