use std::path::PathBuf;

use super::*;

#[test]
fn cli_without_command_is_interactive() {
    let cli = Cli::parse_from(["loc-inspect"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_analyze_default_path() {
    let cli = Cli::parse_from(["loc-inspect", "analyze"]);
    match cli.command {
        Some(Commands::Analyze(args)) => {
            assert_eq!(args.path, PathBuf::from("."));
            assert_eq!(args.format, OutputFormat::Table);
            assert!(!args.collect_all);
            assert!(!args.strict);
            assert!(args.class_scope.is_none());
        }
        _ => panic!("Expected Analyze command"),
    }
}

#[test]
fn cli_analyze_with_all_options() {
    let cli = Cli::parse_from([
        "loc-inspect",
        "analyze",
        "project",
        "--config",
        "custom.toml",
        "--format",
        "legacy",
        "--output",
        "report.txt",
        "--ext",
        "java,jav",
        "-x",
        "**/gen/**",
        "-x",
        "**/build/**",
        "--max-line-length",
        "100",
        "--collect-all",
        "--class-scope",
        "body",
        "--gitignore",
        "--strict",
    ]);
    match cli.command {
        Some(Commands::Analyze(args)) => {
            assert_eq!(args.path, PathBuf::from("project"));
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
            assert_eq!(args.format, OutputFormat::Legacy);
            assert_eq!(args.output, Some(PathBuf::from("report.txt")));
            assert_eq!(
                args.ext,
                Some(vec!["java".to_string(), "jav".to_string()])
            );
            assert_eq!(args.exclude.len(), 2);
            assert_eq!(args.max_line_length, Some(100));
            assert!(args.collect_all);
            assert_eq!(args.class_scope, Some(ScopeChoice::Body));
            assert!(args.gitignore);
            assert!(args.strict);
        }
        _ => panic!("Expected Analyze command"),
    }
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["loc-inspect", "analyze", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["loc-inspect", "analyze", "-vv", "--color", "never", "--no-config"]);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(cli.no_config);
}

#[test]
fn cli_interactive_with_format() {
    let cli = Cli::parse_from(["loc-inspect", "interactive", "--format", "json"]);
    match cli.command {
        Some(Commands::Interactive(args)) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("Expected Interactive command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["loc-inspect", "init"]);
    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from(".loc-inspect.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn choices_convert_to_library_types() {
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ClassScope::from(ScopeChoice::Body), ClassScope::Body);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
