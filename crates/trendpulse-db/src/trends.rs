//! Database operations for the `trends` table.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use trendpulse_core::EnrichedTrend;
use uuid::Uuid;

use crate::DbError;

/// A row from the `trends` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TrendRow {
    pub id: i64,
    pub platform: String,
    pub topic_hashtag: String,
    pub engagement_score: f64,
    pub sentiment_polarity: f64,
    pub sentiment_label: String,
    pub posts: i64,
    pub views: i64,
    pub metadata: Value,
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Replace all rows for a platform with freshly enriched trends.
///
/// Runs in one transaction: delete every row tagged with `platform`, then
/// insert `trends` in order. Returns the number of rows inserted.
///
/// An empty slice is a no-op and returns 0 — a run that scraped nothing must
/// not wipe the current data.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction fails; nothing is committed
/// in that case.
pub async fn replace_platform_trends(
    pool: &PgPool,
    platform: &str,
    trends: &[EnrichedTrend],
) -> Result<u64, DbError> {
    if trends.is_empty() {
        tracing::warn!(platform, "no trends to store, leaving existing rows in place");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM trends WHERE platform = $1")
        .bind(platform)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    for trend in trends {
        let metadata = serde_json::to_value(&trend.metadata)?;
        sqlx::query(
            "INSERT INTO trends \
                 (platform, topic_hashtag, engagement_score, sentiment_polarity, \
                  sentiment_label, posts, views, metadata, run_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&trend.platform)
        .bind(&trend.topic_hashtag)
        .bind(trend.engagement_score)
        .bind(trend.sentiment_polarity)
        .bind(trend.sentiment_label.as_str())
        .bind(trend.posts)
        .bind(trend.views)
        .bind(metadata)
        .bind(trend.run_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        platform,
        deleted,
        inserted = trends.len(),
        "replaced platform trends"
    );

    Ok(u64::try_from(trends.len()).unwrap_or(u64::MAX))
}

/// List the current rows for a platform in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_platform_trends(pool: &PgPool, platform: &str) -> Result<Vec<TrendRow>, DbError> {
    let rows = sqlx::query_as::<_, TrendRow>(
        "SELECT id, platform, topic_hashtag, engagement_score, sentiment_polarity, \
                sentiment_label, posts, views, metadata, run_id, created_at \
         FROM trends \
         WHERE platform = $1 \
         ORDER BY id ASC",
    )
    .bind(platform)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
