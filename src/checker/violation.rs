use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{LocInspectError, Result};

/// Style rule identifiers, declared in the order the validator applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    LineLength,
    AnnotationFormat,
    BraceStyle,
    MultipleStatements,
    WildcardImport,
}

impl ViolationKind {
    /// Every rule, in application order.
    pub const ALL: [Self; 5] = [
        Self::LineLength,
        Self::AnnotationFormat,
        Self::BraceStyle,
        Self::MultipleStatements,
        Self::WildcardImport,
    ];

    /// Human-readable description of the broken rule.
    #[must_use]
    pub fn message(self, max_line_length: usize) -> String {
        match self {
            Self::LineLength => format!("Exceeds {max_line_length} characters"),
            Self::AnnotationFormat => "Incorrect annotation formatting".to_string(),
            Self::BraceStyle => "Incorrect brace style".to_string(),
            Self::MultipleStatements => "Multiple executable statements".to_string(),
            Self::WildcardImport => "Contains a wildcard import".to_string(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineLength => "line-length",
            Self::AnnotationFormat => "annotation-format",
            Self::BraceStyle => "brace-style",
            Self::MultipleStatements => "multiple-statements",
            Self::WildcardImport => "wildcard-import",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style rule broken at a specific line of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("Error: Line {line} {file_name} {message}")]
pub struct StyleViolation {
    pub kind: ViolationKind,
    pub file_name: String,
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl StyleViolation {
    #[must_use]
    pub fn new(
        kind: ViolationKind,
        file_name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            line,
            message: message.into(),
        }
    }
}

/// How many violations a file validation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Stop at the first broken rule in the file.
    #[default]
    FailFast,
    /// Report every broken rule on every line.
    CollectAll,
}

/// Outcome of validating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    /// Never empty. Holds exactly one violation in fail-fast mode.
    Failed(Vec<StyleViolation>),
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub fn violations(&self) -> &[StyleViolation] {
        match self {
            Self::Passed => &[],
            Self::Failed(violations) => violations,
        }
    }

    #[must_use]
    pub fn first_violation(&self) -> Option<&StyleViolation> {
        self.violations().first()
    }

    /// Converts a failed outcome into a `FormatViolation` error.
    ///
    /// # Errors
    /// Returns `FormatViolation` carrying every recorded violation.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Passed => Ok(()),
            Self::Failed(violations) => Err(LocInspectError::FormatViolation(violations)),
        }
    }
}
