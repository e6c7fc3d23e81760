//! Configuration module for hue-config.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hue_config_browser::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::builder()
//!     .url(Some("http://hue.example.com:8888".into()))
//!     .default_app("beeswax")
//!     .build();
//!
//! let config = AppConfig::from_preset(ConfigPreset::Scripting);
//!
//! use hue_config_browser::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.hue-config.yaml` file in the working directory or
//! `~/.config/hue-config/`:
//!
//! ```yaml
//! source:
//!   url: http://hue.example.com:8888
//! selection:
//!   default_app: beeswax
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS,
    DEFAULT_TIMEOUT_SECS, MAX_RETRIES_LIMIT, MAX_RETRY_BACKOFF_MS,
};
pub use types::{AppConfig, AppConfigBuilder, OutputConfig, SelectionConfig, SourceConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.hue-config.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
