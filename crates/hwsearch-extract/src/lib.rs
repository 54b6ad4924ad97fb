//! Secondary page-text extraction capability.
//!
//! Not part of the product-search path: search output is synthesized
//! entirely in memory. This crate fetches a URL, extracts its main
//! readable text, and memoizes the result in an explicit, bounded
//! [`PageCache`] supplied by the caller.

pub mod cache;
pub mod client;
pub mod error;
pub mod readable;
mod retry;

pub use cache::PageCache;
pub use client::PageClient;
pub use error::ExtractError;
pub use readable::extract_readable_text;

/// Sentinel returned when a page yields no extractable text, for any reason.
pub const EXTRACTION_FAILED: &str = "Could not extract content from the website.";

/// Returns the main readable text of `url`, consulting `cache` first.
///
/// On a cache miss the page is fetched through `client` and the extracted
/// text is cached for subsequent calls. Failed fetches and text-free pages
/// are not cached.
///
/// Never fails: network errors, non-2xx statuses, and documents with no
/// readable text all degrade to [`EXTRACTION_FAILED`].
pub async fn fetch_page_text(client: &PageClient, cache: &mut PageCache, url: &str) -> String {
    if let Some(text) = cache.get(url) {
        tracing::debug!(url, "page text served from cache");
        return text.to_owned();
    }

    let html = match client.fetch_html(url).await {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!(url, error = %err, "page fetch failed");
            return EXTRACTION_FAILED.to_owned();
        }
    };

    match extract_readable_text(&html) {
        Some(text) => {
            cache.insert(url.to_owned(), text.clone());
            text
        }
        None => {
            tracing::debug!(url, "document contained no readable text");
            EXTRACTION_FAILED.to_owned()
        }
    }
}
