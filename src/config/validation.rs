//! Configuration validation.

use super::defaults::{MAX_RETRIES_LIMIT, MAX_RETRY_BACKOFF_MS};
use super::types::{AppConfig, OutputConfig, SelectionConfig, SourceConfig};
use reqwest::Url;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.source.validate());
        errors.extend(self.selection.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for SourceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(url) = &self.url {
            match Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(ConfigError::new(
                    "source.url",
                    format!("Unsupported scheme '{}', expected http or https", parsed.scheme()),
                )),
                Err(e) => errors.push(ConfigError::new(
                    "source.url",
                    format!("Invalid URL '{url}': {e}"),
                )),
            }
        }

        if self.url.is_some() && self.file.is_some() {
            errors.push(ConfigError::new(
                "source",
                "Set either source.url or source.file, not both",
            ));
        }

        if !self.endpoint_path.starts_with('/') {
            errors.push(ConfigError::new(
                "source.endpoint_path",
                format!("Endpoint path '{}' must start with '/'", self.endpoint_path),
            ));
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "source.timeout_secs",
                "Timeout must be greater than 0",
            ));
        }

        if self.max_retries > MAX_RETRIES_LIMIT {
            errors.push(ConfigError::new(
                "source.max_retries",
                format!(
                    "Max retries must be at most {MAX_RETRIES_LIMIT}, got {}",
                    self.max_retries
                ),
            ));
        }

        if self.retry_backoff_ms > MAX_RETRY_BACKOFF_MS {
            errors.push(ConfigError::new(
                "source.retry_backoff_ms",
                format!(
                    "Retry backoff must be at most {MAX_RETRY_BACKOFF_MS} ms, got {}",
                    self.retry_backoff_ms
                ),
            ));
        }

        errors
    }
}

impl Validatable for SelectionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.default_app.trim().is_empty() {
            vec![ConfigError::new(
                "selection.default_app",
                "Default application must not be empty",
            )]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file {
            if let Some(parent) = file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = SourceConfig {
            url: Some("ftp://hue.example.com".into()),
            ..SourceConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "source.url");
        assert!(errors[0].message.contains("ftp"));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let config = SourceConfig {
            url: Some("hue.example.com".into()),
            ..SourceConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_rejects_url_and_file() {
        let config = SourceConfig {
            url: Some("http://localhost:8888".into()),
            file: Some(PathBuf::from("dump.json")),
            ..SourceConfig::default()
        };
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "source"));
    }

    #[test]
    fn test_rejects_zero_timeout_and_excess_retries() {
        let config = SourceConfig {
            timeout_secs: 0,
            max_retries: MAX_RETRIES_LIMIT + 1,
            ..SourceConfig::default()
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["source.timeout_secs", "source.max_retries"]);
    }

    #[test]
    fn test_rejects_excess_backoff() {
        let config = SourceConfig {
            retry_backoff_ms: u64::MAX,
            ..SourceConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "source.retry_backoff_ms");

        let config = SourceConfig {
            retry_backoff_ms: MAX_RETRY_BACKOFF_MS,
            ..SourceConfig::default()
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let config = SourceConfig {
            endpoint_path: "desktop/api2/get_hue_config".into(),
            ..SourceConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_rejects_blank_default_app() {
        let config = SelectionConfig {
            default_app: "  ".into(),
        };
        assert_eq!(config.validate()[0].field, "selection.default_app");
    }

    #[test]
    fn test_rejects_missing_output_dir() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/view.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let config = OutputConfig {
            file: Some(PathBuf::from("view.json")),
            ..OutputConfig::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("source.url", "bad");
        assert_eq!(err.to_string(), "source.url: bad");
    }
}
