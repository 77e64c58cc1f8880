use std::fs;

use tracing::info;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, LocInspectError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(LocInspectError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    info!(path = %output_path.display(), "Wrote configuration template");

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# loc-inspect configuration file
version = "1"

[scanner]
# File-name suffixes of analysed sources, without the dot
extensions = ["java"]

# Glob patterns of files to skip
exclude = [
    "**/build/**",
    "**/target/**",
    "**/generated/**",
]

# Respect .gitignore rules while scanning (default: false)
gitignore = false

[style]
# Maximum characters on a trimmed line (default: 120)
max_line_length = 120

# "fail-fast" stops at the first violation in a file,
# "collect-all" reports every violation
mode = "fail-fast"

# Rules to turn off: line-length, annotation-format, brace-style,
# multiple-statements, wildcard-import
disabled_rules = []

[metrics]
# "file" gives every class the whole file's counts,
# "body" counts only the lines inside the class braces
class_scope = "file"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
