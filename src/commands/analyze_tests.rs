use std::collections::HashMap;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::analyzer::{ClassRecord, ClassScope, FileFailure};
use crate::checker::ViolationKind;
use crate::cli::Commands;
use crate::source::SourceFile;

const ALPHA: &str = "\
public class Alpha {
    public void one() {
    }

    public int two() {
        return 2;
    }
}
";

const BETA: &str = "\
public class Beta {
    private void first() {
        if (ready) {
            go();
        }
    }

    private void second() {
    }
}
";

const BROKEN: &str = "\
import java.util.*;
public class Broken {
    int a = 1; int b = 2;
}
";

struct MapLoader {
    files: HashMap<PathBuf, &'static str>,
}

impl MapLoader {
    fn new(files: &[(&str, &'static str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, text)| (PathBuf::from(path), *text))
                .collect(),
        }
    }
}

impl FileLoader for MapLoader {
    fn load(&self, path: &Path) -> Result<SourceFile> {
        self.files
            .get(path)
            .map(|text| SourceFile::from_source(path, text))
            .ok_or_else(|| LocInspectError::FileAccess {
                path: path.to_path_buf(),
            })
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn run(loader: &MapLoader, names: &[&str], config: &Config) -> ProjectReport {
    analyze_files("demo", &paths(names), config, loader, &ScanProgress::new(0, true))
}

fn analyze_args(extra: &[&str]) -> AnalyzeArgs {
    let argv = ["loc-inspect", "analyze"].into_iter().chain(extra.iter().copied());
    match Cli::parse_from(argv).command {
        Some(Commands::Analyze(args)) => args,
        _ => panic!("Expected Analyze command"),
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn two_accepted_files_sum_into_totals() {
    let loader = MapLoader::new(&[("Alpha.java", ALPHA), ("Beta.java", BETA)]);

    let report = run(&loader, &["Alpha.java", "Beta.java"], &Config::default());

    assert_eq!(report.total_physical_lines, 16);
    assert_eq!(report.total_logical_lines, 7);
    assert_eq!(report.total_methods(), 4);
    let classes: Vec<_> = report.classes().cloned().collect();
    assert_eq!(
        classes,
        vec![ClassRecord::new("Alpha", 2, 7), ClassRecord::new("Beta", 2, 9)]
    );
    assert!(!report.has_failures());
}

#[test]
fn rejected_file_is_excluded_from_totals() {
    let loader = MapLoader::new(&[("Alpha.java", ALPHA), ("Broken.java", BROKEN)]);

    let report = run(&loader, &["Alpha.java", "Broken.java"], &Config::default());

    assert_eq!(report.total_physical_lines, 7);
    assert_eq!(report.files.len(), 1);
    match &report.failures[..] {
        [FileFailure::Rejected { path, violations }] => {
            assert_eq!(path, &PathBuf::from("Broken.java"));
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].kind, ViolationKind::WildcardImport);
            assert_eq!(violations[0].line, 1);
        }
        other => panic!("unexpected failures: {other:?}"),
    }
}

#[test]
fn collect_all_records_every_violation() {
    let loader = MapLoader::new(&[("Broken.java", BROKEN)]);
    let mut config = Config::default();
    config.style.mode = ValidationMode::CollectAll;

    let report = run(&loader, &["Broken.java"], &config);

    let kinds: Vec<_> = match &report.failures[0] {
        FileFailure::Rejected { violations, .. } => violations.iter().map(|v| v.kind).collect(),
        other => panic!("unexpected failure: {other:?}"),
    };
    assert_eq!(
        kinds,
        vec![ViolationKind::WildcardImport, ViolationKind::MultipleStatements]
    );
}

#[test]
fn unreadable_file_does_not_stop_the_run() {
    let loader = MapLoader::new(&[("Beta.java", BETA)]);

    let report = run(&loader, &["Gone.java", "Beta.java"], &Config::default());

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.total_physical_lines, 9);
    assert_eq!(
        report.failures,
        vec![FileFailure::Unreadable {
            path: PathBuf::from("Gone.java"),
            message: "The file does not exist: Gone.java".to_string(),
        }]
    );
}

#[test]
fn body_scope_is_taken_from_config() {
    let source: &'static str = "class Outer {\n    void a() {\n    }\n    class Inner {\n    }\n}\n";
    let loader = MapLoader::new(&[("Outer.java", source)]);
    let mut config = Config::default();
    config.metrics.class_scope = ClassScope::Body;

    let report = run(&loader, &["Outer.java"], &config);
    let classes: Vec<_> = report.classes().cloned().collect();

    assert_eq!(
        classes,
        vec![ClassRecord::new("Outer", 1, 6), ClassRecord::new("Inner", 0, 2)]
    );
}

#[test]
fn empty_file_list_gives_empty_report() {
    let report = run(&MapLoader::new(&[]), &[], &Config::default());
    assert_eq!(report.program_name, "demo");
    assert_eq!(report.total_physical_lines, 0);
    assert!(report.files.is_empty());
}

// =============================================================================
// Directories on disk
// =============================================================================

#[test]
fn missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = analyze_directory(&missing, &Config::default()).unwrap_err();

    assert!(matches!(err, LocInspectError::Directory { .. }));
    assert!(err.to_string().starts_with("The directory does not exist: "));
}

#[test]
fn regular_file_is_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Alpha.java");
    fs::write(&file, ALPHA).unwrap();

    let err = analyze_directory(&file, &Config::default()).unwrap_err();

    assert_eq!(err.error_type(), "Directory");
}

#[test]
fn directory_scan_counts_only_source_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("inventory");
    fs::create_dir_all(project.join("src/model")).unwrap();
    fs::write(project.join("src/Alpha.java"), ALPHA).unwrap();
    fs::write(project.join("src/model/Beta.java"), BETA).unwrap();
    fs::write(project.join("README.md"), "# readme\n").unwrap();

    let report = analyze_directory(&project, &Config::default()).unwrap();

    assert_eq!(report.program_name, "inventory");
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.total_physical_lines, 16);
    assert_eq!(report.total_logical_lines, 7);
    assert_eq!(report.classes().count(), 2);
}

#[test]
fn invalid_utf8_file_is_recorded_as_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Bad.java"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(temp_dir.path().join("Beta.java"), BETA).unwrap();

    let report = analyze_directory(temp_dir.path(), &Config::default()).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(matches!(
        &report.failures[..],
        [FileFailure::Unreadable { message, .. }] if message.starts_with("Failed to read file")
    ));
}

#[test]
fn exclude_patterns_skip_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("generated")).unwrap();
    fs::write(temp_dir.path().join("Alpha.java"), ALPHA).unwrap();
    fs::write(temp_dir.path().join("generated/Broken.java"), BROKEN).unwrap();
    let mut config = Config::default();
    config.scanner.exclude = vec!["**/generated/**".to_string()];

    let report = analyze_directory(temp_dir.path(), &config).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(!report.has_failures());
}

// =============================================================================
// Configuration plumbing
// =============================================================================

#[test]
fn no_config_flag_uses_defaults() {
    let config = load_config(Some(Path::new("/definitely/not/here.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[style]\nmax_line_length = 60\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();

    assert_eq!(config.style.max_line_length, 60);
}

#[test]
fn cli_overrides_replace_config_values() {
    let mut config = Config::default();
    config.scanner.exclude = vec!["**/build/**".to_string()];
    let args = analyze_args(&[
        "--ext",
        "jav",
        "-x",
        "**/gen/**",
        "--max-line-length",
        "80",
        "--collect-all",
        "--class-scope",
        "body",
        "--gitignore",
    ]);

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.scanner.extensions, vec!["jav".to_string()]);
    assert_eq!(
        config.scanner.exclude,
        vec!["**/build/**".to_string(), "**/gen/**".to_string()]
    );
    assert!(config.scanner.gitignore);
    assert_eq!(config.style.max_line_length, 80);
    assert_eq!(config.style.mode, ValidationMode::CollectAll);
    assert_eq!(config.metrics.class_scope, ClassScope::Body);
}

#[test]
fn no_overrides_keep_config() {
    let mut config = Config::default();
    apply_cli_overrides(&mut config, &analyze_args(&[]));
    assert_eq!(config, Config::default());
}

#[test]
fn strict_run_reports_violations_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Broken.java"), BROKEN).unwrap();
    let out = temp_dir.path().join("report.txt");
    let dir = temp_dir.path().to_string_lossy().into_owned();
    let out_arg = out.to_string_lossy().into_owned();
    let argv = ["loc-inspect", "--no-config", "-q", "analyze", dir.as_str(), "--strict", "-o", out_arg.as_str()];
    let cli = Cli::parse_from(argv);
    let Some(Commands::Analyze(args)) = &cli.command else {
        panic!("Expected Analyze command");
    };

    assert_eq!(run_analyze(args, &cli), EXIT_VIOLATIONS_FOUND);
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Error: Line 1 Broken.java Contains a wildcard import\n"));
}

#[test]
fn missing_directory_exits_with_config_error() {
    let cli = Cli::parse_from(["loc-inspect", "--no-config", "analyze", "/no/such/dir/anywhere"]);
    let Some(Commands::Analyze(args)) = &cli.command else {
        panic!("Expected Analyze command");
    };

    assert_eq!(run_analyze(args, &cli), EXIT_CONFIG_ERROR);
}
