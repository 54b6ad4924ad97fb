use std::time::Duration;

use reqwest::Client;

use crate::error::ExtractError;
use crate::retry::retry_with_backoff;

/// HTTP client for fetching raw page HTML.
///
/// Handles not-found (404) and other non-2xx responses as typed errors.
/// Transient failures (network errors, 5xx statuses) are automatically
/// retried with exponential backoff up to `max_retries` additional attempts.
pub struct PageClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl PageClient {
    /// Creates a `PageClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first failure
    /// for retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a `PageClient` from [`hwsearch_core::AppConfig`] extract settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &hwsearch_core::AppConfig) -> Result<Self, ExtractError> {
        Self::new(
            config.extract_request_timeout_secs,
            &config.extract_user_agent,
            config.extract_max_retries,
            config.extract_retry_backoff_base_secs,
        )
    }

    /// Fetches the raw HTML body of `url`, with automatic retry on
    /// transient errors.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::NotFound`] — HTTP 404 (not retried).
    /// - [`ExtractError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, 4xx not).
    /// - [`ExtractError::Http`] — network or TLS failure after all retries
    ///   exhausted.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ExtractError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ExtractError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                Ok(response.text().await?)
            }
        })
        .await
    }
}
