use crate::classifier::ConstructClassifier;
use crate::source::SourceFile;

use super::CommentTracker;

/// Counts lines of a source file according to a specific policy.
pub trait LineCounter {
    /// Count the lines of `file`. Each call starts with a fresh comment state.
    fn count(&self, file: &SourceFile) -> usize;
}

/// Iterates the non-comment lines of `file`, threading one comment tracker
/// through every line in order.
fn code_lines<'f>(
    file: &'f SourceFile,
    classifier: &ConstructClassifier,
) -> impl Iterator<Item = &'f str> {
    let mut tracker = CommentTracker::new(classifier.patterns());
    file.lines()
        .iter()
        .map(String::as_str)
        .filter(move |line| !tracker.is_comment(line))
}

/// Non-blank, non-comment lines.
pub struct PhysicalLineCounter<'a> {
    classifier: &'a ConstructClassifier,
}

impl<'a> PhysicalLineCounter<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier) -> Self {
        Self { classifier }
    }
}

impl LineCounter for PhysicalLineCounter<'_> {
    fn count(&self, file: &SourceFile) -> usize {
        code_lines(file, self.classifier)
            .filter(|line| !line.trim().is_empty())
            .count()
    }
}

/// Lines opening a class, method, flow-control or try construct, net of the
/// instantiation and `else if` exclusions.
pub struct LogicalLineCounter<'a> {
    classifier: &'a ConstructClassifier,
}

impl<'a> LogicalLineCounter<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier) -> Self {
        Self { classifier }
    }
}

impl LineCounter for LogicalLineCounter<'_> {
    fn count(&self, file: &SourceFile) -> usize {
        code_lines(file, self.classifier)
            .filter(|line| self.classifier.is_logical_line(line))
            .count()
    }
}

/// Lines matching the method-declaration pattern.
pub struct MethodLineCounter<'a> {
    classifier: &'a ConstructClassifier,
}

impl<'a> MethodLineCounter<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier) -> Self {
        Self { classifier }
    }
}

impl LineCounter for MethodLineCounter<'_> {
    fn count(&self, file: &SourceFile) -> usize {
        code_lines(file, self.classifier)
            .filter(|line| self.classifier.is_method_declaration(line))
            .count()
    }
}

/// Class, interface and enum declarations. Nested declarations count separately.
pub struct ClassCounter<'a> {
    classifier: &'a ConstructClassifier,
}

impl<'a> ClassCounter<'a> {
    #[must_use]
    pub const fn new(classifier: &'a ConstructClassifier) -> Self {
        Self { classifier }
    }
}

impl LineCounter for ClassCounter<'_> {
    fn count(&self, file: &SourceFile) -> usize {
        code_lines(file, self.classifier)
            .filter(|line| self.classifier.is_class_declaration(line))
            .count()
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
