//! Unified error types for hue-config-browser.
//!
//! This module provides the error hierarchy for the library, with enough
//! context to produce the single user-visible message a failed load shows.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hue-config-browser operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HueConfigError {
    /// Errors while fetching a configuration snapshot
    #[error("Failed to fetch configuration: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors while decoding a configuration snapshot
    #[error("Failed to decode configuration: {context}")]
    Decode {
        context: String,
        #[source]
        source: DecodeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {}: {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Specific decode error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Duplicate configuration root for application '{0}'")]
    DuplicateRoot(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for hue-config-browser operations
pub type Result<T> = std::result::Result<T, HueConfigError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl HueConfigError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: DecodeErrorKind) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: format!("{source}"),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Render the error and its source chain as one line.
    ///
    /// This is the message a failed load stores and shows to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for HueConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(
            "JSON deserialization",
            DecodeErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use hue_config_browser::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path).map_err(|e| HueConfigError::io(path, e))?;
/// let snapshot = HueConfigSnapshot::from_json(&content)
///     .with_context(|| format!("decoding {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<HueConfigError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: HueConfigError, new_ctx: &str) -> HueConfigError {
    match err {
        HueConfigError::Fetch {
            context: existing,
            source,
        } => HueConfigError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        HueConfigError::Decode {
            context: existing,
            source,
        } => HueConfigError::Decode {
            context: chain_context(new_ctx, &existing),
            source,
        },
        HueConfigError::Io {
            path,
            message,
            source,
        } => HueConfigError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        HueConfigError::Config(msg) => HueConfigError::Config(chain_context(new_ctx, &msg)),
        HueConfigError::Validation(msg) => {
            HueConfigError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| HueConfigError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| HueConfigError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HueConfigError::fetch(
            "GET /desktop/api2/get_hue_config",
            FetchErrorKind::Status {
                status: 500,
                body: "boom".to_string(),
            },
        );
        let display = err.to_string();
        assert!(display.contains("fetch"), "should mention fetching: {display}");
        assert!(display.contains("get_hue_config"));
    }

    #[test]
    fn test_user_message_includes_source() {
        let err = HueConfigError::fetch(
            "request",
            FetchErrorKind::Network("connection refused".to_string()),
        );
        let message = err.user_message();
        assert!(message.contains("request"));
        assert!(message.contains("connection refused"), "{message}");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HueConfigError::io("/path/to/config.json", io_err);

        assert!(err.to_string().contains("/path/to/config.json"));
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: HueConfigError = parse.unwrap_err().into();
        assert!(matches!(
            err,
            HueConfigError::Decode {
                source: DecodeErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(HueConfigError::fetch(
            "initial context",
            FetchErrorKind::InvalidUrl("nope".to_string()),
        ));

        match initial.context("outer context") {
            Err(HueConfigError::Fetch { context, .. }) => {
                assert_eq!(context, "outer context: initial context");
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn test_option_context() {
        let missing: Option<u8> = None;
        let err = missing.context_none("no value").unwrap_err();
        assert!(matches!(err, HueConfigError::Validation(ref m) if m == "no value"));

        let present = Some(3).with_context_none(|| "unused");
        assert_eq!(present.unwrap(), 3);
    }
}
