/// Runtime configuration for the CLI and the page-text extraction client.
///
/// Every field has a working default, so the binary runs with an empty
/// environment. The search path's output never depends on any of these
/// values; they only govern logging and the secondary extraction client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Total request timeout for page fetches, in seconds.
    pub extract_request_timeout_secs: u64,
    /// `User-Agent` header sent by the page-text client.
    pub extract_user_agent: String,
    /// Retry attempts after the first failed fetch. `0` disables retries.
    pub extract_max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    pub extract_retry_backoff_base_secs: u64,
    /// Maximum number of URL entries held by a page-text cache.
    pub extract_cache_capacity: usize,
}
