//! Configuration loading from TOML files

mod loadout;

pub use loadout::{LoadoutConfig, VitalsConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a loadout file
pub fn load_loadout(path: &Path) -> Result<LoadoutConfig, ConfigError> {
    let loadout: LoadoutConfig = load_toml(path)?;
    validate_loadout(&loadout)?;
    Ok(loadout)
}

/// Parse and validate a loadout string
pub fn parse_loadout(content: &str) -> Result<LoadoutConfig, ConfigError> {
    let loadout: LoadoutConfig = parse_toml(content)?;
    validate_loadout(&loadout)?;
    Ok(loadout)
}

fn validate_loadout(loadout: &LoadoutConfig) -> Result<(), ConfigError> {
    let vitals = &loadout.vitals;
    for (name, value) in [
        ("health", vitals.health),
        ("max_health", vitals.max_health),
        ("shield", vitals.shield),
        ("max_shield", vitals.max_shield),
        ("shield_regen", vitals.shield_regen),
        ("shield_regen_delay", vitals.shield_regen_delay),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "vitals.{name} must be a non-negative number, got {value}"
            )));
        }
    }
    Ok(())
}
