use std::fmt::Write;

use crate::analyzer::ProjectReport;
use crate::error::Result;

use super::text::{ColorMode, FailureFormatter};
use super::ReportFormatter;

/// Bordered fixed-width text table with left-aligned cells.
///
/// Each column is as wide as its widest cell (header included), measured in
/// characters, with one space of padding on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty, extra cells are dropped.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }

    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        write_separator(&mut out, &widths);
        write_row(&mut out, &self.headers, &widths);
        write_separator(&mut out, &widths);
        for row in &self.rows {
            write_row(&mut out, row, &widths);
        }
        write_separator(&mut out, &widths);

        out
    }
}

fn write_separator(out: &mut String, widths: &[usize]) {
    out.push('+');
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        // `{:<w$}` pads by char count
        let _ = write!(out, " {cell:<width$} |");
    }
    out.push('\n');
}

/// Program, Class, Methods, Class physical LOC and Program physical LOC,
/// one row per class record.
pub struct ClassTableFormatter {
    failures: FailureFormatter,
}

impl ClassTableFormatter {
    pub const HEADERS: [&'static str; 5] = [
        "Program",
        "Class",
        "Methods",
        "Class physical LOC",
        "Program physical LOC",
    ];

    #[must_use]
    pub fn new(color: ColorMode) -> Self {
        Self {
            failures: FailureFormatter::new(color),
        }
    }
}

impl ReportFormatter for ClassTableFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        let mut table = Table::new(Self::HEADERS);
        let program_total = report.total_physical_lines.to_string();
        for class in report.classes() {
            table.add_row([
                report.program_name.clone(),
                class.class_name.clone(),
                class.method_count.to_string(),
                class.physical_lines.to_string(),
                program_total.clone(),
            ]);
        }

        Ok(self.failures.format(&report.failures) + &table.render())
    }
}

/// Program, Physical LOC and Logical LOC, one row for the whole program.
pub struct LegacyTableFormatter {
    failures: FailureFormatter,
}

impl LegacyTableFormatter {
    pub const HEADERS: [&'static str; 3] = ["Program", "Physical LOC", "Logical LOC"];

    #[must_use]
    pub fn new(color: ColorMode) -> Self {
        Self {
            failures: FailureFormatter::new(color),
        }
    }
}

impl ReportFormatter for LegacyTableFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        let mut table = Table::new(Self::HEADERS);
        table.add_row([
            report.program_name.clone(),
            report.total_physical_lines.to_string(),
            report.total_logical_lines.to_string(),
        ]);

        Ok(self.failures.format(&report.failures) + &table.render())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
