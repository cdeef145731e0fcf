//! HTTP client for the trends24 region pages.

use std::time::Duration;

use reqwest::Client;
use trendpulse_core::RawTrend;

use crate::error::ScrapeError;
use crate::extract::{extract_trends, ExtractOptions};

/// HTTP client that discovers a working source URL by trying an ordered
/// fallback list until one yields at least one trend.
///
/// Per-URL failures (network errors, non-2xx statuses, pages with no trend
/// markup) are logged and skipped; only exhausting the whole list is an
/// error. No retry or backoff beyond the fallback order.
pub struct TrendsClient {
    client: Client,
}

impl TrendsClient {
    /// Creates a `TrendsClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Default fallback URL list for a region page.
    ///
    /// Scheme and `www` variants of the same host; the site is flaky about
    /// which one answers.
    #[must_use]
    pub fn region_urls(region: &str) -> Vec<String> {
        vec![
            format!("https://trends24.in/{region}/"),
            format!("http://trends24.in/{region}/"),
            format!("https://www.trends24.in/{region}/"),
        ]
    }

    /// Fetch trends for a region using the default fallback URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::AllSourcesFailed`] when every URL fails or
    /// yields no trends.
    pub async fn fetch_trends(
        &self,
        region: &str,
        options: ExtractOptions,
    ) -> Result<Vec<RawTrend>, ScrapeError> {
        let urls = Self::region_urls(region);
        self.fetch_trends_from(&urls, options).await
    }

    /// Fetch trends trying each URL in order until one yields a non-empty
    /// extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::AllSourcesFailed`] when every URL fails or
    /// yields no trends.
    pub async fn fetch_trends_from(
        &self,
        urls: &[String],
        options: ExtractOptions,
    ) -> Result<Vec<RawTrend>, ScrapeError> {
        for url in urls {
            match self.fetch_page(url).await {
                Ok(html) => {
                    let trends = extract_trends(&html, options);
                    if trends.is_empty() {
                        tracing::warn!(url = %url, "no trend links found, trying next URL");
                        continue;
                    }
                    tracing::info!(url = %url, count = trends.len(), "extracted trends");
                    return Ok(trends);
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "fetch failed, trying next URL");
                }
            }
        }

        Err(ScrapeError::AllSourcesFailed {
            attempted: urls.len(),
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
