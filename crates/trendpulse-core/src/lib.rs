//! Shared domain types and configuration for trendpulse.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

mod app_config;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// Platform tag stamped on every persisted trend row. The store replaces
/// all rows sharing this tag on each run.
pub const PLATFORM: &str = "Twitter";

/// A trend entry as extracted from the trends page, before enrichment.
///
/// `topic` is the anchor text, conventionally `#`-prefixed. `raw_count` is
/// the tweet-count span text (e.g. `"25K"`, `"1,234"`) or `"N/A"` when the
/// page provides none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrend {
    pub topic: String,
    pub raw_count: String,
    pub source_link: String,
}

/// Sentiment bucket derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Bucket a polarity in [-1, 1] using the ±0.05 thresholds.
    /// Boundary values map to `Neutral`.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.05 {
            SentimentLabel::Positive
        } else if polarity < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auxiliary fields persisted alongside a trend as JSONB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendMetadata {
    /// Search link for the topic on the source platform.
    pub link: String,
    /// Placeholder descriptive sentence for the topic.
    pub synthesized_content: String,
    /// Count string exactly as scraped, kept for audit.
    pub raw_count: String,
}

/// A fully enriched trend, ready for persistence. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTrend {
    pub platform: String,
    pub topic_hashtag: String,
    /// Heuristic popularity score, clamped to [1.0, 10.0], 2 decimal places.
    pub engagement_score: f64,
    /// Polarity in [-1.0, 1.0] from the lexicon scorer.
    pub sentiment_polarity: f64,
    pub sentiment_label: SentimentLabel,
    /// Post count parsed from `metadata.raw_count`. Never negative.
    pub posts: i64,
    /// The source provides no view counts; always 0.
    pub views: i64,
    pub metadata: TrendMetadata,
    /// Shared by every record produced in one invocation.
    pub run_id: Uuid,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_positive_above_threshold() {
        assert_eq!(SentimentLabel::from_polarity(0.06), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(1.0), SentimentLabel::Positive);
    }

    #[test]
    fn label_negative_below_threshold() {
        assert_eq!(SentimentLabel::from_polarity(-0.06), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn boundary_polarities_are_neutral() {
        assert_eq!(SentimentLabel::from_polarity(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"Positive\"");
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let meta = TrendMetadata {
            link: "https://twitter.com/search?q=%23Test".to_string(),
            synthesized_content: "Trending discussion about Test.".to_string(),
            raw_count: "25K".to_string(),
        };
        let value = serde_json::to_value(&meta).unwrap();
        let back: TrendMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }
}
