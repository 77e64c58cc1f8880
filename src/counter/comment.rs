use crate::language::SyntaxPatterns;

/// Classification of one source line with respect to comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
}

/// Block-comment state carried from one line to the next within a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentState {
    #[default]
    Normal,
    InBlockComment,
}

impl CommentState {
    /// Classifies `line` given the state left by the previous line and returns
    /// the state for the next line.
    ///
    /// - Inside a block comment every line is a comment; a line ending in `*/`
    ///   returns to `Normal`.
    /// - A line starting with `/*` is a comment and enters `InBlockComment`
    ///   unless the same line also ends the comment.
    /// - A line starting with `//` is a comment and leaves the state unchanged.
    #[must_use]
    pub fn classify(self, line: &str, patterns: &SyntaxPatterns) -> (Self, LineKind) {
        match self {
            Self::InBlockComment => {
                let next = if patterns.block_comment_end.is_match(line) {
                    Self::Normal
                } else {
                    Self::InBlockComment
                };
                (next, LineKind::Comment)
            }
            Self::Normal if patterns.block_comment_start.is_match(line) => {
                let next = if patterns.block_comment_end.is_match(line) {
                    Self::Normal
                } else {
                    Self::InBlockComment
                };
                (next, LineKind::Comment)
            }
            Self::Normal if patterns.line_comment.is_match(line) => (Self::Normal, LineKind::Comment),
            Self::Normal => (Self::Normal, LineKind::Code),
        }
    }
}

/// Per-file comment classifier.
///
/// `is_comment` must be called exactly once per line, in file order. Every
/// counter and the style validator own a separate tracker.
pub struct CommentTracker<'a> {
    patterns: &'a SyntaxPatterns,
    state: CommentState,
}

impl<'a> CommentTracker<'a> {
    #[must_use]
    pub const fn new(patterns: &'a SyntaxPatterns) -> Self {
        Self {
            patterns,
            state: CommentState::Normal,
        }
    }

    /// Returns true if `line` is a comment line, advancing the block-comment state.
    pub fn is_comment(&mut self, line: &str) -> bool {
        let (next, kind) = self.state.classify(line, self.patterns);
        self.state = next;
        kind == LineKind::Comment
    }

    #[must_use]
    pub const fn state(&self) -> CommentState {
        self.state
    }

    /// Returns to `Normal`, as at the start of a new file.
    pub const fn reset(&mut self) {
        self.state = CommentState::Normal;
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
