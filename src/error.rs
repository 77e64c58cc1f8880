use std::path::PathBuf;

use thiserror::Error;

use crate::checker::StyleViolation;

#[derive(Error, Debug)]
pub enum LocInspectError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("The file does not exist: {}", .path.display())]
    FileAccess { path: PathBuf },

    #[error("Failed to read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The directory does not exist: {}", .path.display())]
    Directory { path: PathBuf },

    #[error("{}", format_violations(.0))]
    FormatViolation(Vec<StyleViolation>),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LocInspectError {
    /// Short variant name, used for structured output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::FileRead { .. } => "FileRead",
            Self::Directory { .. } => "Directory",
            Self::FormatViolation(_) => "FormatViolation",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether this error only affects a single file and the scan can continue.
    #[must_use]
    pub const fn is_file_level(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { .. } | Self::FileRead { .. } | Self::FormatViolation(_)
        )
    }
}

fn format_violations(violations: &[StyleViolation]) -> String {
    match violations {
        [] => "Format violation".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (+{} more)", rest.len()),
    }
}

pub type Result<T> = std::result::Result<T, LocInspectError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
