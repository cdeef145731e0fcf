//! Trend enrichment pipeline for trendpulse.
//!
//! Pure, total functions over extracted trend strings: regional relevance
//! classification, count normalization, lexicon-based sentiment with
//! threshold bucketing, heuristic engagement scoring, and placeholder
//! content synthesis. No I/O lives here; every function degrades to a
//! default value instead of returning an error.

pub mod content;
pub mod count;
pub mod engagement;
pub mod pipeline;
pub mod relevance;
pub mod scorer;
pub mod sentiment;

pub use content::synthesize_content;
pub use count::parse_count;
pub use engagement::score_engagement;
pub use pipeline::enrich;
pub use relevance::is_regionally_relevant;
pub use scorer::lexicon_score;
pub use sentiment::analyze_sentiment;
