//! # Configuration
//!
//! One place for every setting, resolved in a fixed order:
//! defaults → config file → env vars → CLI flags.
//!
//! The file lives at `~/.prato/config.toml`. On first run a fully
//! commented-out template is written there so the options are discoverable.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// File Structs (every field Option<T> so partial files parse)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PratoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_food_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_FOOD_ID: u64 = 1;

// ============================================================================
// Resolved Config (what the rest of the app sees, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub food_id: u64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config: {e}"),
            ConfigError::Parse(e) => write!(f, "could not parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.prato/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".prato").join("config.toml"))
}

/// Load config from `~/.prato/config.toml`.
///
/// A missing file is not an error: the commented-out template is written
/// and defaults are returned. A file that exists but fails to parse is,
/// so typos don't silently fall back.
pub fn load_config() -> Result<PratoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("No home directory, running on defaults");
            return Ok(PratoConfig::default());
        }
    };

    if !path.exists() {
        info!("Writing config template to {}", path.display());
        generate_default_config(&path);
        return Ok(PratoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PratoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Config loaded from {}", path.display());
    debug!("config: {:?}", config);
    Ok(config)
}

/// Writes the commented-out template so users can see every knob.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Prato Configuration
# Every setting is optional; anything left unset falls back to its default.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_food_id = 1                # Menu item opened on start

# [api]
# base_url = "http://localhost:3333" # Or set PRATO_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Could not create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Could not write config template: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapses the hierarchy into concrete values: defaults → file → env → CLI.
///
/// `cli_base_url` and `cli_food_id` come from the flags (None = not given).
pub fn resolve(
    config: &PratoConfig,
    cli_base_url: Option<&str>,
    cli_food_id: Option<u64>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PRATO_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Food id: CLI → config → default
    let food_id = cli_food_id
        .or(config.general.default_food_id)
        .unwrap_or(DEFAULT_FOOD_ID);

    ResolvedConfig { base_url, food_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_has_no_values() {
        let config = PratoConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.general.default_food_id.is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let config = PratoConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.food_id, DEFAULT_FOOD_ID);
    }

    #[test]
    fn test_resolve_prefers_file_over_defaults() {
        let config = PratoConfig {
            general: GeneralConfig {
                default_food_id: Some(7),
            },
            api: ApiConfig {
                base_url: Some("http://10.0.0.5:3333".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.base_url, "http://10.0.0.5:3333");
        assert_eq!(resolved.food_id, 7);
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = PratoConfig {
            general: GeneralConfig {
                default_food_id: Some(7),
            },
            api: ApiConfig {
                base_url: Some("http://10.0.0.5:3333".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://localhost:4444"), Some(2));
        assert_eq!(resolved.base_url, "http://localhost:4444");
        assert_eq!(resolved.food_id, 2);
    }

    #[test]
    fn test_full_file_parses() {
        let toml_str = r#"
[general]
default_food_id = 3

[api]
base_url = "http://192.168.1.100:3333"
"#;
        let config: PratoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_food_id, Some(3));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.100:3333")
        );
    }

    #[test]
    fn test_partial_file_parses() {
        // A file that sets a single key leaves the rest at defaults
        let toml_str = r#"
[api]
base_url = "http://localhost:3333"
"#;
        let config: PratoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:3333"));
        assert!(config.general.default_food_id.is_none());
    }
}
