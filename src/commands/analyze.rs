use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::analyzer::{FileAnalyzer, FileMetrics, MetricsAggregator, ProjectReport};
use crate::checker::{StyleValidator, ValidationMode};
use crate::classifier::ConstructClassifier;
use crate::cli::{AnalyzeArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::error::{LocInspectError, Result};
use crate::output::{ColorMode, ScanProgress};
use crate::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use crate::source::{FileLoader, FsLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

#[must_use]
pub fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads config, analyzes `args.path` and writes the formatted report.
///
/// # Errors
/// Returns an error if the config is invalid, the directory does not exist, or
/// the report cannot be written.
pub fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let report = analyze_directory_with_progress(&args.path, &config, cli.quiet)?;

    let color = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = args.format.formatter(color).format(&report)?;
    write_output(args.output.as_deref(), &output)?;

    if args.strict && report.has_failures() {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Loads the configuration, or defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub fn apply_cli_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.gitignore {
        config.scanner.gitignore = true;
    }

    if let Some(max_line_length) = args.max_line_length {
        config.style.max_line_length = max_line_length;
    }

    if args.collect_all {
        config.style.mode = ValidationMode::CollectAll;
    }

    if let Some(scope) = args.class_scope {
        config.metrics.class_scope = scope.into();
    }
}

/// Analyzes every source file under `dir` without a progress bar.
///
/// # Errors
/// Returns `Directory` if `dir` is missing or not a directory, and
/// `InvalidPattern` for a malformed exclude glob.
pub fn analyze_directory(dir: &Path, config: &Config) -> Result<ProjectReport> {
    analyze_directory_with_progress(dir, config, true)
}

/// Analyzes every source file under `dir`.
///
/// A missing or non-directory `dir` is the only failure that aborts the run.
/// Unreadable or rejected files are recorded in the report.
///
/// # Errors
/// Returns `Directory` if `dir` is missing or not a directory, and
/// `InvalidPattern` for a malformed exclude glob.
pub fn analyze_directory_with_progress(
    dir: &Path,
    config: &Config,
    quiet: bool,
) -> Result<ProjectReport> {
    if !dir.is_dir() {
        return Err(LocInspectError::Directory {
            path: dir.to_path_buf(),
        });
    }

    let filter = SourceFilter::new(&config.scanner.extensions, &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    let files = scanner.scan(dir)?;

    let name = program_name(dir);
    info!(program = %name, files = files.len(), "Starting analysis");

    let progress = ScanProgress::new(files.len() as u64, quiet);
    let report = analyze_files(name, &files, config, &FsLoader, &progress);
    progress.finish();

    info!(
        program = %report.program_name,
        accepted = report.files.len(),
        skipped = report.failures.len(),
        physical = report.total_physical_lines,
        logical = report.total_logical_lines,
        "Analysis finished"
    );
    Ok(report)
}

/// Loads, validates and counts each file in order. Files that cannot be
/// loaded or that break a style rule are recorded as failures.
pub fn analyze_files(
    program_name: impl Into<String>,
    paths: &[PathBuf],
    config: &Config,
    loader: &dyn FileLoader,
    progress: &ScanProgress,
) -> ProjectReport {
    let classifier = ConstructClassifier::new();
    let validator = StyleValidator::new(&classifier, &config.style);
    let analyzer = FileAnalyzer::new(&classifier, config.metrics.class_scope);
    let mut aggregator = MetricsAggregator::new(program_name);

    for path in paths {
        match process_file(path, loader, &validator, &analyzer) {
            Ok(metrics) => aggregator.add_file(metrics),
            Err(error) => {
                log_skipped(path, &error);
                aggregator.add_failure(path, error);
            }
        }
        progress.inc();
    }

    aggregator.finish()
}

fn process_file(
    path: &Path,
    loader: &dyn FileLoader,
    validator: &StyleValidator<'_>,
    analyzer: &FileAnalyzer<'_>,
) -> Result<FileMetrics> {
    let file = loader.load(path)?;
    validator.validate(&file).into_result()?;
    Ok(analyzer.analyze(&file))
}

fn log_skipped(path: &Path, error: &LocInspectError) {
    match error {
        LocInspectError::FormatViolation(violations) => info!(
            path = %path.display(),
            violations = violations.len(),
            "Skipping file with style violations"
        ),
        other => warn!(path = %path.display(), error = %other, "Skipping unreadable file"),
    }
}

/// Final component of the canonical directory path.
fn program_name(dir: &Path) -> String {
    dunce::canonicalize(dir)
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string())
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
