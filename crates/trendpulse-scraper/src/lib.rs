//! Trend extraction from the trends24 region pages.
//!
//! Fetches the region page over HTTP with an ordered fallback URL list,
//! walks the markup for trend anchors and tweet-count spans, filters for
//! regionally relevant hashtags, and produces a bounded, deduplicated
//! sequence of [`trendpulse_core::RawTrend`] records for enrichment.

pub mod client;
pub mod error;
pub mod extract;
pub mod link;

pub use client::TrendsClient;
pub use error::ScrapeError;
pub use extract::{extract_trends, ExtractOptions};
pub use link::search_link;
