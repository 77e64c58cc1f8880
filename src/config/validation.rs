//! Semantic checks applied after a config file parses.

use crate::config::{CONFIG_VERSION, Config};
use crate::{LocInspectError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `Config` for an unsupported version, a zero line limit or an empty
/// extension list, and `InvalidPattern` for a malformed exclude glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_style_section(config)?;
    validate_scanner_section(config)?;
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(LocInspectError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_style_section(config: &Config) -> Result<()> {
    if config.style.max_line_length == 0 {
        return Err(LocInspectError::Config(
            "style.max_line_length must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(LocInspectError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    if let Some(blank) = config
        .scanner
        .extensions
        .iter()
        .position(|ext| ext.trim_start_matches('.').is_empty())
    {
        return Err(LocInspectError::Config(format!(
            "scanner.extensions[{blank}] is empty"
        )));
    }
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| LocInspectError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}
