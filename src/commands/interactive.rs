use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, InteractiveArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{ColorMode, OutputFormat};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::analyze::{analyze_directory_with_progress, load_config};

pub const DIRECTORY_PROMPT: &str = "Please enter the directory path: ";
pub const CONTINUE_PROMPT: &str =
    "Do you want to try analyzing another project? (y/another entry for no): ";

/// Prompt loop over a line-oriented input and an output sink.
pub struct InteractiveSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: Config,
    format: OutputFormat,
    color: ColorMode,
    quiet: bool,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            format: OutputFormat::Table,
            color: ColorMode::Never,
            quiet: true,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat, color: ColorMode) -> Self {
        self.format = format;
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.quiet = !show;
        self
    }

    /// Runs until the user declines another analysis or input ends.
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(directory) = self.prompt_directory()? else {
                return Ok(());
            };

            self.analyze(Path::new(&directory))?;

            write!(self.output, "{CONTINUE_PROMPT}")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(());
            };
            if answer.trim().to_lowercase() != "y" {
                return Ok(());
            }
        }
    }

    /// Prompts until a non-empty path is entered. `None` at end of input.
    fn prompt_directory(&mut self) -> Result<Option<String>> {
        loop {
            write!(self.output, "{DIRECTORY_PROMPT}")?;
            self.output.flush()?;
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => {}
                Some(line) => return Ok(Some(line.trim().to_string())),
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Interactive input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Writes the report, or the error message when the run fails.
    fn analyze(&mut self, directory: &Path) -> Result<()> {
        let rendered = analyze_directory_with_progress(directory, &self.config, self.quiet)
            .and_then(|report| self.format.formatter(self.color).format(&report));
        match rendered {
            Ok(report) => write!(self.output, "{report}")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }
}

#[must_use]
pub fn run_interactive(args: &InteractiveArgs, cli: &Cli) -> i32 {
    match run_interactive_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs an interactive session on stdin and stdout.
///
/// # Errors
/// Returns an error if the config cannot be loaded or the terminal fails.
pub fn run_interactive_impl(args: &InteractiveArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    InteractiveSession::new(stdin.lock(), stdout.lock(), config)
        .with_format(args.format, cli.color.into())
        .with_progress(!cli.quiet)
        .run()
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
