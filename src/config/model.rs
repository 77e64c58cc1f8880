use serde::{Deserialize, Serialize};

use crate::analyzer::ClassScope;
use crate::checker::{ValidationMode, ViolationKind};
use crate::language::{MAX_LINE_LENGTH, SOURCE_EXTENSION};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of a `.loc-inspect.toml` file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Absent means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Which files under the analysed directory are picked up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File-name suffixes, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns of files to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect `.gitignore` rules while walking (default: false)
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// Style rule settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleConfig {
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    #[serde(default)]
    pub mode: ValidationMode,

    /// Rules that are never applied.
    #[serde(default)]
    pub disabled_rules: Vec<ViolationKind>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            mode: ValidationMode::default(),
            disabled_rules: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Span counted for each class record.
    #[serde(default)]
    pub class_scope: ClassScope,
}

fn default_extensions() -> Vec<String> {
    vec![SOURCE_EXTENSION.to_string()]
}

const fn default_max_line_length() -> usize {
    MAX_LINE_LENGTH
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
