//! Render type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for rendered views
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree for terminals
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Options shared by all renderers
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Print help text under each entry
    pub show_help: bool,
    /// Print default values next to current values
    pub show_defaults: bool,
    /// Use ANSI colors (text only)
    pub colored: bool,
    /// Indentation per nesting level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_help: false,
            show_defaults: true,
            colored: true,
            indent: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_serde() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{format}\""));
        }
    }

    #[test]
    fn test_format_from_cli_value() {
        let format = OutputFormat::from_str("json", true).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
