pub mod analyze;
pub mod init;
pub mod interactive;

pub use analyze::{analyze_directory, analyze_files, run_analyze};
pub use init::{generate_config_template, run_init};
pub use interactive::{InteractiveSession, run_interactive};
