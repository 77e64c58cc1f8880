use serde::{Deserialize, Serialize};

use crate::classifier::ConstructClassifier;
use crate::counter::{CommentTracker, LineCounter, MethodLineCounter, PhysicalLineCounter};
use crate::source::SourceFile;

use super::types::ClassRecord;

/// Which lines are attributed to a class record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassScope {
    /// Every class in a file receives the whole file's method and physical counts.
    #[default]
    File,
    /// Counts are limited to the lines between the declaration and its matching
    /// closing brace. Nested classes are part of the enclosing span.
    Body,
}

/// Produces one [`ClassRecord`] per class declaration line.
pub struct ClassAnalyzer<'a> {
    classifier: &'a ConstructClassifier,
    scope: ClassScope,
}

impl<'a> ClassAnalyzer<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier, scope: ClassScope) -> Self {
        Self { classifier, scope }
    }

    #[must_use]
    pub const fn scope(&self) -> ClassScope {
        self.scope
    }

    #[must_use]
    pub fn analyze(&self, file: &SourceFile) -> Vec<ClassRecord> {
        let mut tracker = CommentTracker::new(self.classifier.patterns());
        let code: Vec<&str> = file
            .lines()
            .iter()
            .map(String::as_str)
            .filter(|line| !tracker.is_comment(line))
            .collect();

        let declarations = code
            .iter()
            .enumerate()
            .filter(|(_, line)| self.classifier.is_class_declaration(line));

        match self.scope {
            ClassScope::File => {
                let methods = MethodLineCounter::new(self.classifier).count(file);
                let physical = PhysicalLineCounter::new(self.classifier).count(file);
                declarations
                    .map(|(_, line)| {
                        ClassRecord::new(self.classifier.extract_class_name(line), methods, physical)
                    })
                    .collect()
            }
            ClassScope::Body => declarations
                .map(|(start, line)| {
                    let span = &code[start..=self.body_end(&code, start)];
                    self.record_for_span(line, span)
                })
                .collect(),
        }
    }

    fn record_for_span(&self, declaration: &str, span: &[&str]) -> ClassRecord {
        let methods = span
            .iter()
            .filter(|line| self.classifier.is_method_declaration(line))
            .count();
        let physical = span.iter().filter(|line| !line.trim().is_empty()).count();
        ClassRecord::new(self.classifier.extract_class_name(declaration), methods, physical)
    }

    /// Index of the line holding the brace that closes the body opened at or
    /// after `start`. Falls back to the last line when the body never closes.
    fn body_end(&self, code: &[&str], start: usize) -> usize {
        let mut depth = 0usize;
        let mut opened = false;

        for (i, line) in code.iter().enumerate().skip(start) {
            for ch in self.classifier.strip_string_literals(line).chars() {
                match ch {
                    '{' => {
                        depth += 1;
                        opened = true;
                    }
                    '}' if opened => {
                        depth = depth.saturating_sub(1);
                        if depth == 0 {
                            return i;
                        }
                    }
                    _ => {}
                }
            }
        }

        code.len().saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
