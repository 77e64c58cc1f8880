use clap::Parser;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

use loc_inspect::cli::{Cli, Commands, InteractiveArgs};
use loc_inspect::commands::{run_analyze, run_init, run_interactive};

const fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn init_logging(cli: &Cli) {
    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(log_level(cli.verbose, cli.quiet));
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args, &cli),
        Some(Commands::Interactive(args)) => run_interactive(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        None => run_interactive(&InteractiveArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}
