//! Sentiment analysis for trend topics.

use trendpulse_core::SentimentLabel;

use crate::scorer::lexicon_score;

/// Analyze the sentiment of a hashtag or topic string.
///
/// Strips `#` markers, replaces underscores with spaces, and delegates
/// polarity to [`lexicon_score`]. The polarity is bucketed with the ±0.05
/// thresholds (boundary values are Neutral).
///
/// The scorer is total, so unknown or empty text yields `(Neutral, 0.0)`
/// rather than an error.
#[must_use]
pub fn analyze_sentiment(text: &str) -> (SentimentLabel, f64) {
    let clean = text.replace('#', "").replace('_', " ");
    let polarity = lexicon_score(&clean);
    let label = SentimentLabel::from_polarity(polarity);
    tracing::debug!(topic = text, polarity, label = %label, "scored sentiment");
    (label, polarity)
}
