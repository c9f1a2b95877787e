//! Configuration loading
//!
//! Defaults, then an optional JSON file, then a few environment overrides.
//! The result is validated before it is returned.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::types::{ConfigError, GameConfig};

/// Path of a JSON configuration document
pub const CONFIG_PATH_ENV: &str = "PIXEL_TETRIS_CONFIG";
pub const TICK_RATE_ENV: &str = "PIXEL_TETRIS_TICK_RATE";
pub const HOLD_DELAY_ENV: &str = "PIXEL_TETRIS_HOLD_DELAY";
pub const SLEEP_MS_ENV: &str = "PIXEL_TETRIS_SLEEP_MS";
pub const SEED_ENV: &str = "PIXEL_TETRIS_SEED";

/// Load the configuration from the process environment.
pub fn load() -> Result<GameConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Load the configuration, reading variables through `lookup`.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<GameConfig, ConfigError> {
    let mut config = match lookup(CONFIG_PATH_ENV) {
        Some(path) => from_file(Path::new(&path))?,
        None => GameConfig::default(),
    };
    apply_overrides(&mut config, &lookup);
    config.validate()?;
    Ok(config)
}

/// Parse a JSON document; absent keys keep their defaults.
pub fn from_json_str(json: &str) -> Result<GameConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

pub fn from_file(path: &Path) -> Result<GameConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!("loaded configuration from {}", path.display());
    from_json_str(&text)
}

/// Apply environment overrides; unparsable values are ignored with a warning.
pub fn apply_overrides(config: &mut GameConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = parse_var(&lookup, TICK_RATE_ENV) {
        config.tick_rate = v;
    }
    if let Some(v) = parse_var(&lookup, HOLD_DELAY_ENV) {
        config.hold_delay = v;
    }
    if let Some(v) = parse_var(&lookup, SLEEP_MS_ENV) {
        config.sleep_ms = v;
    }
    if let Some(v) = parse_var(&lookup, SEED_ENV) {
        config.seed = Some(v);
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}
