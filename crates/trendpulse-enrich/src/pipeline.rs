//! Enrichment pipeline orchestration.

use trendpulse_core::{EnrichedTrend, RawTrend, TrendMetadata, PLATFORM};
use uuid::Uuid;

use crate::content::synthesize_content;
use crate::count::parse_count;
use crate::engagement::score_engagement;
use crate::sentiment::analyze_sentiment;

/// Enrich a batch of raw trends, stamping every record with `run_id`.
///
/// Each element is enriched independently from its own fields and the fixed
/// keyword tables; output order matches input order and nothing is
/// deduplicated here — that is the extractor's job. Total: the component
/// functions all degrade to defaults instead of failing.
#[must_use]
pub fn enrich(raw_trends: &[RawTrend], run_id: Uuid) -> Vec<EnrichedTrend> {
    raw_trends
        .iter()
        .map(|raw| enrich_one(raw, run_id))
        .collect()
}

fn enrich_one(raw: &RawTrend, run_id: Uuid) -> EnrichedTrend {
    let engagement_score = score_engagement(&raw.topic, &raw.raw_count);
    let (sentiment_label, sentiment_polarity) = analyze_sentiment(&raw.topic);
    let posts = parse_count(&raw.raw_count);

    tracing::debug!(
        topic = %raw.topic,
        engagement_score,
        sentiment = %sentiment_label,
        posts,
        "enriched trend"
    );

    EnrichedTrend {
        platform: PLATFORM.to_string(),
        topic_hashtag: raw.topic.clone(),
        engagement_score,
        sentiment_polarity,
        sentiment_label,
        posts,
        views: 0,
        metadata: TrendMetadata {
            link: raw.source_link.clone(),
            synthesized_content: synthesize_content(&raw.topic),
            raw_count: raw.raw_count.clone(),
        },
        run_id,
    }
}
