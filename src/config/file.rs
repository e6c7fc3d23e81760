//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_TIMEOUT_SECS};
use super::types::AppConfig;
use crate::render::OutputFormat;
use crate::source::DEFAULT_ENDPOINT_PATH;
use crate::state::DEFAULT_SELECTED_APP;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".hue-config.yaml",
    ".hue-config.yml",
    "hue-config.yaml",
    "hue-config.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/hue-config/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("hue-config")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml_ng::from_str(&content)?)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults override. A source
    /// location in `other` replaces both location fields, so a CLI `--file`
    /// beats a `url` from the config file and vice versa.
    pub fn merge(&mut self, other: &Self) {
        // Source config
        if other.source.url.is_some() || other.source.file.is_some() {
            self.source.url.clone_from(&other.source.url);
            self.source.file.clone_from(&other.source.file);
        }
        if other.source.endpoint_path != DEFAULT_ENDPOINT_PATH {
            self.source
                .endpoint_path
                .clone_from(&other.source.endpoint_path);
        }
        if other.source.timeout_secs != DEFAULT_TIMEOUT_SECS {
            self.source.timeout_secs = other.source.timeout_secs;
        }
        if other.source.max_retries != DEFAULT_MAX_RETRIES {
            self.source.max_retries = other.source.max_retries;
        }
        if other.source.retry_backoff_ms != DEFAULT_RETRY_BACKOFF_MS {
            self.source.retry_backoff_ms = other.source.retry_backoff_ms;
        }

        // Selection config
        if other.selection.default_app != DEFAULT_SELECTED_APP {
            self.selection
                .default_app
                .clone_from(&other.selection.default_app);
        }

        // Output config (booleans - if moved off their default, override)
        if other.output.format != OutputFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.show_help {
            self.output.show_help = true;
        }
        if !other.output.show_defaults {
            self.output.show_defaults = false;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from a config value.
#[must_use]
pub fn generate_example_config(config: &AppConfig) -> String {
    format!(
        r"# hue-config configuration
# Place this file at .hue-config.yaml in the working directory or ~/.config/hue-config/

{}",
        serde_yaml_ng::to_string(config).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# hue-config Configuration File
# ==============================
#
# Place it at:
#   - .hue-config.yaml in the working directory
#   - ~/.config/hue-config/hue-config.yaml for global config
#
# CLI arguments always override file settings.

# Where configuration snapshots are loaded from
source:
  # Base URL of the server
  url: http://localhost:8888
  # Saved JSON response to browse offline (instead of url)
  # file: ./hue-config.json
  endpoint_path: /desktop/api2/get_hue_config
  # Request timeout in seconds
  timeout_secs: 30
  # Retries on connection errors and 5xx responses (max 10)
  max_retries: 2
  # Delay before the first retry; doubles on each further attempt
  retry_backoff_ms: 500

# Initial selection after a load
selection:
  # Used when the server has no 'desktop' application
  default_app: desktop

# Output configuration
output:
  # Format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: view.json
  # Disable colored output
  no_color: false
  # Print help text under each entry
  show_help: false
  # Print default values next to current values
  show_defaults: true
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
