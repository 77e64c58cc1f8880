use crate::analyzer::FileFailure;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders skipped files as `Error: ...` lines, one per problem.
pub struct FailureFormatter {
    use_colors: bool,
}

impl FailureFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    fn colorize(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::RED, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn format(&self, failures: &[FileFailure]) -> String {
        failures
            .iter()
            .flat_map(FileFailure::messages)
            .map(|line| self.colorize(&line) + "\n")
            .collect()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
