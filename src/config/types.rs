//! Configuration types for the configuration browser.

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_TIMEOUT_SECS,
};
use crate::render::{OutputFormat, RenderOptions};
use crate::source::{HttpSourceConfig, DEFAULT_ENDPOINT_PATH};
use crate::state::DEFAULT_SELECTED_APP;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration, loaded from a config file and/or CLI args.
///
/// CLI arguments override file settings (see [`AppConfig::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where snapshots are loaded from
    pub source: SourceConfig,
    /// Initial selection after a load
    pub selection: SelectionConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Load from a server at this base URL.
    pub fn url(mut self, url: Option<String>) -> Self {
        self.config.source.url = url;
        self
    }

    /// Load from a saved JSON response.
    pub fn file(mut self, file: Option<PathBuf>) -> Self {
        self.config.source.file = file;
        self
    }

    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.source.timeout_secs = secs;
        self
    }

    pub const fn max_retries(mut self, retries: u8) -> Self {
        self.config.source.max_retries = retries;
        self
    }

    /// Application selected after a load when `desktop` is absent.
    pub fn default_app(mut self, app: impl Into<String>) -> Self {
        self.config.selection.default_app = app.into();
        self
    }

    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn show_help(mut self, show: bool) -> Self {
        self.config.output.show_help = show;
        self
    }

    pub const fn show_defaults(mut self, show: bool) -> Self {
        self.config.output.show_defaults = show;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Snapshot source settings.
///
/// `file` takes precedence over `url`; with neither set the default base URL
/// is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the server (e.g. `http://hue.example.com:8888`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Saved JSON response to read instead of contacting a server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Endpoint path resolved against `url`
    pub endpoint_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries on transport errors and 5xx responses
    pub max_retries: u8,
    /// Delay before the first retry in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}

impl SourceConfig {
    /// Settings for the HTTP source.
    #[must_use]
    pub fn http_config(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            base_url: self
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            endpoint_path: self.endpoint_path.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

/// Initial selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelectionConfig {
    /// Application selected after a load; a `desktop` app always wins
    pub default_app: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_app: DEFAULT_SELECTED_APP.to_string(),
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Print help text under each entry
    pub show_help: bool,
    /// Print default values next to current values
    pub show_defaults: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            file: None,
            no_color: false,
            show_help: false,
            show_defaults: true,
        }
    }
}

impl OutputConfig {
    /// Renderer options; `colored` still depends on the output target.
    #[must_use]
    pub fn render_options(&self, colored: bool) -> RenderOptions {
        RenderOptions {
            show_help: self.show_help,
            show_defaults: self.show_defaults,
            colored,
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .url(Some("https://hue.internal".into()))
            .default_app("beeswax")
            .output_format(OutputFormat::Json)
            .show_help(true)
            .build();

        assert_eq!(config.source.url.as_deref(), Some("https://hue.internal"));
        assert_eq!(config.selection.default_app, "beeswax");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_help);
        assert!(config.output.show_defaults);
    }

    #[test]
    fn test_http_config_falls_back_to_default_url() {
        let http = SourceConfig::default().http_config();
        assert_eq!(http.base_url, DEFAULT_BASE_URL);
        assert_eq!(http.endpoint_path, DEFAULT_ENDPOINT_PATH);
        assert_eq!(http.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig =
            serde_yaml_ng::from_str("selection:\n  default_app: impala\n").unwrap();
        assert_eq!(config.selection.default_app, "impala");
        assert_eq!(config.source, SourceConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_render_options() {
        let output = OutputConfig {
            show_help: true,
            show_defaults: false,
            ..OutputConfig::default()
        };
        let options = output.render_options(false);
        assert!(options.show_help);
        assert!(!options.show_defaults);
        assert!(!options.colored);
    }
}
