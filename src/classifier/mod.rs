//! Pattern-based construct classification of single source lines.
//!
//! Two predicates intentionally disagree: [`ConstructClassifier::is_logical_line`]
//! applies the instantiation and `else if` exclusions, while
//! [`ConstructClassifier::is_method_declaration`] does not. Method totals and
//! logical-line totals therefore differ on lines such as `return build(x);`.

use std::borrow::Cow;

use serde::Serialize;

use crate::language::{SyntaxPatterns, UNKNOWN_CLASS_NAME};

/// Syntactic category recognised on a trimmed, non-comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructKind {
    /// `new Type(...)` anywhere on the line; never a logical line.
    Instantiation,
    /// `else if` continuation; folded into the opening `if`.
    ElseIf,
    /// `class`, `interface` or `enum` declaration.
    Struct,
    Method,
    /// `if`, `for`, `while` or `switch` header.
    FlowControl,
    TryBlock,
}

impl ConstructKind {
    /// Whether a line of this kind counts as a logical line.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(
            self,
            Self::Struct | Self::Method | Self::FlowControl | Self::TryBlock
        )
    }
}

/// Stateless classifier over a precompiled [`SyntaxPatterns`] set.
#[derive(Debug, Clone, Default)]
pub struct ConstructClassifier {
    patterns: SyntaxPatterns,
}

impl ConstructClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_patterns(SyntaxPatterns::new())
    }

    #[must_use]
    pub const fn with_patterns(patterns: SyntaxPatterns) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub const fn patterns(&self) -> &SyntaxPatterns {
        &self.patterns
    }

    /// Classifies a line by precedence: instantiation and `else if` exclusions
    /// first, then declaration, method, flow control and try block.
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<ConstructKind> {
        let line = line.trim();
        let p = &self.patterns;

        if p.instantiation.is_match(line) {
            return Some(ConstructKind::Instantiation);
        }
        if p.else_if.is_match(line) {
            return Some(ConstructKind::ElseIf);
        }

        if p.struct_declaration.is_match(line) {
            Some(ConstructKind::Struct)
        } else if p.method_declaration.is_match(line) {
            Some(ConstructKind::Method)
        } else if p.flow_control.is_match(line) {
            Some(ConstructKind::FlowControl)
        } else if p.try_block.is_match(line) {
            Some(ConstructKind::TryBlock)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_logical_line(&self, line: &str) -> bool {
        self.classify(line).is_some_and(ConstructKind::is_logical)
    }

    /// Method-declaration pattern alone, without the logical-line exclusions.
    #[must_use]
    pub fn is_method_declaration(&self, line: &str) -> bool {
        self.patterns.method_declaration.is_match(line.trim())
    }

    #[must_use]
    pub fn is_class_declaration(&self, line: &str) -> bool {
        self.patterns.struct_declaration.is_match(line.trim())
    }

    /// Name following the `class` keyword, or `UnknownClass`.
    #[must_use]
    pub fn extract_class_name(&self, line: &str) -> String {
        self.patterns
            .class_name
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or_else(
                || UNKNOWN_CLASS_NAME.to_string(),
                |m| m.as_str().to_string(),
            )
    }

    /// Removes single- and double-quoted literals so their content cannot be
    /// mistaken for braces, semicolons or keywords.
    #[must_use]
    pub fn strip_string_literals<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.patterns.quoted_string.replace_all(line, "")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
