mod style;
mod violation;

pub use style::StyleValidator;
pub use violation::{StyleViolation, ValidationMode, ValidationOutcome, ViolationKind};

use crate::source::SourceFile;

pub trait Checker {
    /// Check a loaded file against the configured style rules.
    fn check(&self, file: &SourceFile) -> ValidationOutcome;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
