use serde::Serialize;

use crate::analyzer::{ClassRecord, FileFailure, ProjectReport};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    program: &'a str,
    summary: Summary,
    files: Vec<FileEntry<'a>>,
    failures: &'a [FileFailure],
}

#[derive(Serialize)]
struct Summary {
    accepted_files: usize,
    failed_files: usize,
    physical_lines: usize,
    logical_lines: usize,
    methods: usize,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    path: String,
    physical_lines: usize,
    logical_lines: usize,
    methods: usize,
    classes: &'a [ClassRecord],
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        let output = JsonOutput {
            program: &report.program_name,
            summary: Summary {
                accepted_files: report.files.len(),
                failed_files: report.failures.len(),
                physical_lines: report.total_physical_lines,
                logical_lines: report.total_logical_lines,
                methods: report.total_methods(),
            },
            files: report
                .files
                .iter()
                .map(|file| FileEntry {
                    path: file.path.display().to_string(),
                    physical_lines: file.physical_lines,
                    logical_lines: file.logical_lines,
                    methods: file.method_count,
                    classes: &file.classes,
                })
                .collect(),
            failures: &report.failures,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
