//! HTTP client for the configuration endpoint.

use super::ConfigSource;
use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_TIMEOUT_SECS,
    MAX_RETRY_BACKOFF_MS,
};
use crate::error::{FetchErrorKind, HueConfigError, Result};
use crate::model::HueConfigSnapshot;
use reqwest::{Client, Url};
use std::time::Duration;

/// Path of the configuration endpoint on a Hue server.
pub const DEFAULT_ENDPOINT_PATH: &str = "/desktop/api2/get_hue_config";

/// HTTP source configuration.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Server base URL
    pub base_url: String,
    /// Endpoint path, resolved against `base_url`
    pub endpoint_path: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for transport errors and 5xx responses
    pub max_retries: u8,
    /// Delay before the first retry; doubles on each further attempt
    pub retry_backoff: Duration,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

/// Fetches snapshots with one GET request.
#[derive(Debug)]
pub struct HttpConfigSource {
    client: Client,
    url: Url,
    config: HttpSourceConfig,
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(msg: &str, err: &reqwest::Error) -> HueConfigError {
    HueConfigError::fetch(msg, FetchErrorKind::Network(err.to_string()))
}

/// Build the absolute endpoint URL.
pub(crate) fn endpoint_url(base_url: &str, endpoint_path: &str) -> Result<Url> {
    let base = Url::parse(base_url).map_err(|e| invalid_url(format!("{base_url}: {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid_url(format!("unsupported scheme in {base_url}")));
    }
    base.join(endpoint_path)
        .map_err(|e| invalid_url(format!("{base_url} + {endpoint_path}: {e}")))
}

/// Delay before retry `attempt` (1-based), doubling from `base` and capped.
fn retry_delay(base: Duration, attempt: u8) -> Duration {
    let cap = Duration::from_millis(MAX_RETRY_BACKOFF_MS);
    let factor = 1u32
        .checked_shl(u32::from(attempt.saturating_sub(1)))
        .unwrap_or(u32::MAX);
    base.checked_mul(factor).map_or(cap, |delay| delay.min(cap))
}

fn invalid_url(detail: String) -> HueConfigError {
    HueConfigError::fetch("resolving endpoint", FetchErrorKind::InvalidUrl(detail))
}

impl HttpConfigSource {
    /// Create a new HTTP source.
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let url = endpoint_url(&config.base_url, &config.endpoint_path)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self {
            client,
            url,
            config,
        })
    }

    /// The resolved endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    /// Fetch with retries on transport errors and server errors.
    async fn fetch_with_retries(&self) -> Result<HueConfigSnapshot> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = retry_delay(self.config.retry_backoff, attempt);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
                tokio::time::sleep(delay).await;
            }

            match self.send_request().await {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) if is_retryable(&e) => {
                    tracing::debug!("Request attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            HueConfigError::fetch(
                "GET configuration",
                FetchErrorKind::Network("no attempt was made".to_string()),
            )
        }))
    }

    /// Send a single GET request.
    async fn send_request(&self) -> Result<HueConfigSnapshot> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| network_error("Failed to send request", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HueConfigError::fetch(
                format!("GET {}", self.url),
                FetchErrorKind::Status {
                    status: status.as_u16(),
                    body: truncate_body(&body),
                },
            ));
        }

        response.json::<HueConfigSnapshot>().await.map_err(|e| {
            HueConfigError::fetch(
                "parsing response",
                FetchErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }
}

impl ConfigSource for HttpConfigSource {
    async fn fetch(&self) -> Result<HueConfigSnapshot> {
        self.fetch_with_retries().await
    }

    fn name(&self) -> &'static str {
        "http"
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}

/// Transport failures and 5xx responses may succeed on a later attempt.
fn is_retryable(err: &HueConfigError) -> bool {
    match err {
        HueConfigError::Fetch { source, .. } => match source {
            FetchErrorKind::Network(_) => true,
            FetchErrorKind::Status { status, .. } => *status >= 500,
            _ => false,
        },
        _ => false,
    }
}

/// Keep error messages readable when a server returns an HTML error page.
fn truncate_body(body: &str) -> String {
    const MAX_BODY_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(MAX_BODY_CHARS).collect();
        format!("{head}...")
    }
}
