use std::path::PathBuf;

use serde::Serialize;

/// Per-class metrics row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub class_name: String,
    pub method_count: usize,
    pub physical_lines: usize,
}

impl ClassRecord {
    #[must_use]
    pub fn new(class_name: impl Into<String>, method_count: usize, physical_lines: usize) -> Self {
        Self {
            class_name: class_name.into(),
            method_count,
            physical_lines,
        }
    }
}

/// Counts for one accepted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub name: String,
    pub physical_lines: usize,
    pub logical_lines: usize,
    pub method_count: usize,
    /// One record per class declaration, in declaration order.
    pub classes: Vec<ClassRecord>,
}
