//! Default values and presets.

use super::types::{AppConfig, OutputConfig};
use crate::render::OutputFormat;

/// Server contacted when no URL or file is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Retries on transport errors and 5xx responses.
pub const DEFAULT_MAX_RETRIES: u8 = 2;

/// Delay before the first retry, in milliseconds.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Upper bound accepted for `source.max_retries`.
pub const MAX_RETRIES_LIMIT: u8 = 10;

/// Upper bound accepted for `source.retry_backoff_ms`.
pub const MAX_RETRY_BACKOFF_MS: u64 = 60_000;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Text output with current and default values
    Default,
    /// Text output with help text for every entry
    Verbose,
    /// Uncolored JSON output for scripts
    Scripting,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::Scripting => "scripting",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "verbose" | "help" => Some(Self::Verbose),
            "scripting" | "json" | "ci" => Some(Self::Scripting),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Text tree with current and default values",
            Self::Verbose => "Text tree including the help text of every entry",
            Self::Scripting => "Uncolored JSON for scripts and pipelines",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Verbose, Self::Scripting]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        let output = match preset {
            ConfigPreset::Default => OutputConfig::default(),
            ConfigPreset::Verbose => OutputConfig {
                show_help: true,
                ..OutputConfig::default()
            },
            ConfigPreset::Scripting => OutputConfig {
                format: OutputFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
        };
        Self {
            output,
            ..Self::default()
        }
    }
}
