//! HTML extraction of trend entries from a trends24 region page.

use scraper::{Html, Selector};
use trendpulse_core::RawTrend;
use trendpulse_enrich::is_regionally_relevant;

use crate::link::search_link;

/// Count placeholder used when a trend has no tweet-count span.
const NO_COUNT: &str = "N/A";

/// Bounds and filters applied while walking the page.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Hard cap on extracted trends.
    pub max_trends: usize,
    /// Number of leading hashtags kept even when not regionally relevant.
    /// The page orders trends by rank, so the head of the list is worth
    /// keeping regardless.
    pub relevance_grace: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_trends: 9,
            relevance_grace: 5,
        }
    }
}

/// Extract trend entries from a region page.
///
/// Each trend is an `<a class="trend-link">` inside a list item; the item may
/// also carry a `<span class="tweet-count">`. Entries are deduplicated by
/// topic text, restricted to `#`-prefixed topics, and filtered for regional
/// relevance once the grace window is used up. The result preserves page
/// order and never exceeds `options.max_trends`.
#[must_use]
pub fn extract_trends(html: &str, options: ExtractOptions) -> Vec<RawTrend> {
    // Static selectors; parse cannot fail.
    let item_selector = Selector::parse("li").expect("valid li selector");
    let link_selector = Selector::parse("a.trend-link").expect("valid trend-link selector");
    let count_selector = Selector::parse("span.tweet-count").expect("valid tweet-count selector");

    let document = Html::parse_document(html);

    let mut trends: Vec<RawTrend> = Vec::new();
    let mut seen_topics: Vec<String> = Vec::new();

    for item in document.select(&item_selector) {
        if trends.len() >= options.max_trends {
            break;
        }

        let Some(anchor) = item.select(&link_selector).next() else {
            continue;
        };

        let topic = anchor.text().collect::<String>().trim().to_string();
        if topic.is_empty() || seen_topics.iter().any(|t| t == &topic) {
            continue;
        }

        if !topic.starts_with('#') {
            continue;
        }

        if !is_regionally_relevant(&topic) && trends.len() >= options.relevance_grace {
            tracing::debug!(topic = %topic, "skipping non-regional trend past grace window");
            continue;
        }

        let raw_count = item
            .select(&count_selector)
            .next()
            .map(|span| span.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_COUNT.to_string());

        tracing::debug!(topic = %topic, count = %raw_count, "extracted trend");

        seen_topics.push(topic.clone());
        trends.push(RawTrend {
            source_link: search_link(&topic),
            topic,
            raw_count,
        });
    }

    trends
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
