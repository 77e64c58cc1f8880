//! Pattern vocabulary for the analysed curly-brace, class-based language.
//!
//! Every expression is compiled once when [`SyntaxPatterns`] is built and is only
//! ever read afterwards. Patterns documented as *anchored* must match the whole
//! (trimmed) line; the rest match anywhere in the line.

use regex::Regex;

/// Maximum number of characters allowed on a trimmed source line.
pub const MAX_LINE_LENGTH: usize = 120;

/// File-name suffix (without the dot) of analysable source files.
pub const SOURCE_EXTENSION: &str = "java";

/// Name recorded for a class whose declaration does not yield a name.
pub const UNKNOWN_CLASS_NAME: &str = "UnknownClass";

const ACCESS_MODIFIERS: &str = r"((public|private|protected)\s+)?";
const FINAL_OR_STATIC: &str = r"(?:(?:static\s+)?(?:final\s+)?|(?:final\s+)?(?:static\s+)?)?";
const RETURN_TYPE: &str = r"(\s*[a-zA-Z0-9]+(<[a-zA-Z0-9]+>)?\s+)";
const IDENTIFIER: &str = r"\w+\s*";
const PARAMETERS: &str = r"(\([^)]*\)\s*)";
const THROWS_CLAUSE: &str = r"(\s+(throws\s+(\w+\s*,\s*)*\w+)\s*)?";
const FLOW_CONTROL: &str = r"((if|for|while|switch)\s*\([^)]*\))\s*";
const DECLARATION_KEYWORDS: &str =
    "public|private|protected|class|interface|enum|if|else|for|while|switch|do|try";

/// Compiled regular expressions shared by the comment tracker, the construct
/// classifier and the style validator.
#[derive(Debug, Clone)]
pub struct SyntaxPatterns {
    /// `//` as the first non-blank token.
    pub line_comment: Regex,
    /// `/*` (including `/**`) as the first non-blank token.
    pub block_comment_start: Regex,
    /// `*/` as the last non-blank token.
    pub block_comment_end: Regex,
    /// `class`, `enum` or `interface` followed by whitespace.
    pub struct_declaration: Regex,
    /// Access modifier, `static`/`final`, return type, name, parameters, `throws`.
    pub method_declaration: Regex,
    /// `if`, `for`, `while` or `switch` header with a parenthesised condition.
    pub flow_control: Regex,
    /// `try` block header, with or without resources.
    pub try_block: Regex,
    /// `else if` continuation of a conditional chain.
    pub else_if: Regex,
    /// `new Type(...)` object construction.
    pub instantiation: Regex,
    /// Single- or double-quoted literal.
    pub quoted_string: Regex,
    /// Anchored: one annotation with optional arguments and nothing else.
    pub annotation: Regex,
    /// Anchored: `import some.package.*;`.
    pub wildcard_import: Regex,
    /// Anchored: control header terminated by `;` (empty loop body).
    pub control_with_semicolon: Regex,
    /// Anchored: line shaped like a declaration that may legally open a brace.
    pub valid_declaration: Regex,
    /// Captures the identifier after the `class` keyword.
    pub class_name: Regex,
}

impl Default for SyntaxPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxPatterns {
    /// Compiles the full pattern set.
    ///
    /// # Panics
    /// Panics if one of the built-in expressions is invalid, which is a
    /// programming error caught by the unit tests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_comment: compile(r"^\s*//"),
            block_comment_start: compile(r"^\s*/\*"),
            block_comment_end: compile(r"\*/\s*$"),
            struct_declaration: compile(r"((class|enum|interface)\s+)"),
            method_declaration: compile(&format!(
                "{ACCESS_MODIFIERS}{FINAL_OR_STATIC}{RETURN_TYPE}{IDENTIFIER}{PARAMETERS}{THROWS_CLAUSE}"
            )),
            flow_control: compile(FLOW_CONTROL),
            try_block: compile(&format!(r"(try\s+{PARAMETERS}?.*)")),
            else_if: compile(r"\belse\s+if\b"),
            instantiation: compile(
                r"\bnew\s+(([a-zA-Z0-9_]+\.)*[a-zA-Z0-9_]+(<[^>]+>)?\s*\([^)]*\))",
            ),
            quoted_string: compile(r#""[^"]*"|'[^']*'"#),
            annotation: anchored(r"\s*@\w+(\(.*\))?\s*"),
            wildcard_import: anchored(r"\s*import\s+[a-zA-Z0-9_.]+\.\*\s*;"),
            control_with_semicolon: anchored(&format!("{FLOW_CONTROL};")),
            valid_declaration: anchored(&format!(
                r".*\s*({DECLARATION_KEYWORDS})\s+.*\{{.*|.*\)\s*\{{.*"
            )),
            class_name: compile(r"\bclass\s+(\w+)"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex")
}

fn anchored(pattern: &str) -> Regex {
    compile(&format!("^(?:{pattern})$"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
