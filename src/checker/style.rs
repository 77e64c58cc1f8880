use crate::classifier::ConstructClassifier;
use crate::config::StyleConfig;
use crate::counter::CommentTracker;
use crate::language::MAX_LINE_LENGTH;
use crate::source::SourceFile;

use super::{Checker, StyleViolation, ValidationMode, ValidationOutcome, ViolationKind};

/// Ordered rule pipeline applied to every non-blank, non-comment line.
///
/// Line length is measured on the trimmed line. Every later rule sees the line
/// with quoted literals removed.
pub struct StyleValidator<'a> {
    classifier: &'a ConstructClassifier,
    max_line_length: usize,
    mode: ValidationMode,
    disabled_rules: Vec<ViolationKind>,
}

impl<'a> StyleValidator<'a> {
    #[must_use]
    pub fn new(classifier: &'a ConstructClassifier, config: &StyleConfig) -> Self {
        Self {
            classifier,
            max_line_length: config.max_line_length,
            mode: config.mode,
            disabled_rules: config.disabled_rules.clone(),
        }
    }

    /// Validator with a 120 character limit, fail-fast mode and every rule on.
    #[must_use]
    pub const fn with_defaults(classifier: &'a ConstructClassifier) -> Self {
        Self {
            classifier,
            max_line_length: MAX_LINE_LENGTH,
            mode: ValidationMode::FailFast,
            disabled_rules: Vec::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validates `file` line by line.
    ///
    /// In fail-fast mode the first broken rule ends validation of the file.
    #[must_use]
    pub fn validate(&self, file: &SourceFile) -> ValidationOutcome {
        let mut tracker = CommentTracker::new(self.classifier.patterns());
        let mut violations = Vec::new();

        for (index, raw) in file.lines().iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() || tracker.is_comment(line) {
                continue;
            }

            for kind in self.check_line(line) {
                violations.push(StyleViolation::new(
                    kind,
                    file.name(),
                    index + 1,
                    kind.message(self.max_line_length),
                ));
                if self.mode == ValidationMode::FailFast {
                    return ValidationOutcome::Failed(violations);
                }
            }
        }

        if violations.is_empty() {
            ValidationOutcome::Passed
        } else {
            ValidationOutcome::Failed(violations)
        }
    }

    /// Rules broken by a single trimmed code line, in rule order.
    #[must_use]
    pub fn check_line(&self, line: &str) -> Vec<ViolationKind> {
        let stripped = self.classifier.strip_string_literals(line);

        ViolationKind::ALL
            .into_iter()
            .filter(|kind| !self.disabled_rules.contains(kind))
            .filter(|kind| match kind {
                ViolationKind::LineLength => !self.is_valid_line_length(line),
                ViolationKind::AnnotationFormat => !self.is_valid_annotation(&stripped),
                ViolationKind::BraceStyle => !self.is_valid_brace_style(&stripped),
                ViolationKind::MultipleStatements => !self.is_single_statement(&stripped),
                ViolationKind::WildcardImport => !self.is_valid_import(&stripped),
            })
            .collect()
    }

    fn is_valid_line_length(&self, line: &str) -> bool {
        line.chars().count() <= self.max_line_length
    }

    /// An annotation must stand alone on its line.
    fn is_valid_annotation(&self, line: &str) -> bool {
        !line.starts_with('@') || self.classifier.patterns().annotation.is_match(line)
    }

    /// K&R braces only: `{` closes a declaration-shaped line, `{}` and
    /// `while (x);` are rejected.
    fn is_valid_brace_style(&self, line: &str) -> bool {
        let patterns = self.classifier.patterns();
        if line.ends_with("{}") || patterns.control_with_semicolon.is_match(line.trim()) {
            return false;
        }
        !line.ends_with('{') || self.is_valid_declaration(line)
    }

    /// At most one `;`, except on declaration-shaped lines such as `for` headers.
    fn is_single_statement(&self, line: &str) -> bool {
        self.is_valid_declaration(line) || line.matches(';').count() <= 1
    }

    fn is_valid_import(&self, line: &str) -> bool {
        !self.classifier.patterns().wildcard_import.is_match(line)
    }

    fn is_valid_declaration(&self, line: &str) -> bool {
        self.classifier
            .patterns()
            .valid_declaration
            .is_match(line.trim())
    }
}

impl Checker for StyleValidator<'_> {
    fn check(&self, file: &SourceFile) -> ValidationOutcome {
        self.validate(file)
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
