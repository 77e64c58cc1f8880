mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CONFIG_VERSION, Config, MetricsConfig, ScannerConfig, StyleConfig};
pub use validation::validate_config_semantics;
