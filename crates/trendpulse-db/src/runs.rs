//! Database operations for the `scrape_runs` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `scrape_runs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScrapeRunRow {
    pub id: i64,
    pub run_id: Uuid,
    pub region: String,
    pub status: String,
    /// The schema defines this as `INTEGER NOT NULL DEFAULT 0`.
    pub trend_count: i32,
    pub error_message: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Creates a new scrape run in `running` status for the given run UUID.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails (e.g. duplicate `run_id`).
pub async fn create_scrape_run(
    pool: &PgPool,
    run_id: Uuid,
    region: &str,
) -> Result<ScrapeRunRow, DbError> {
    let row = sqlx::query_as::<_, ScrapeRunRow>(
        "INSERT INTO scrape_runs (run_id, region, status) \
         VALUES ($1, $2, 'running') \
         RETURNING id, run_id, region, status, trend_count, error_message, \
                   started_at, completed_at, created_at",
    )
    .bind(run_id)
    .bind(region)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Marks a run as `completed`, recording the trend count and completion time.
///
/// # Errors
///
/// Returns [`DbError::InvalidRunTransition`] if the run is not `running`,
/// or [`DbError::Sqlx`] if the update fails.
pub async fn complete_scrape_run(
    pool: &PgPool,
    run_id: Uuid,
    trend_count: i32,
) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE scrape_runs \
         SET status = 'completed', trend_count = $2, completed_at = NOW() \
         WHERE run_id = $1 AND status = 'running'",
    )
    .bind(run_id)
    .bind(trend_count)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidRunTransition {
            run_id,
            expected_status: "running",
        });
    }

    Ok(())
}

/// Marks a run as `failed` with an error message.
///
/// # Errors
///
/// Returns [`DbError::InvalidRunTransition`] if the run is not `running`,
/// or [`DbError::Sqlx`] if the update fails.
pub async fn fail_scrape_run(
    pool: &PgPool,
    run_id: Uuid,
    error_message: &str,
) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE scrape_runs \
         SET status = 'failed', error_message = $2, completed_at = NOW() \
         WHERE run_id = $1 AND status = 'running'",
    )
    .bind(run_id)
    .bind(error_message)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidRunTransition {
            run_id,
            expected_status: "running",
        });
    }

    Ok(())
}

/// Fetch a run by its UUID, or `None` if it does not exist.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_scrape_run(pool: &PgPool, run_id: Uuid) -> Result<Option<ScrapeRunRow>, DbError> {
    let row = sqlx::query_as::<_, ScrapeRunRow>(
        "SELECT id, run_id, region, status, trend_count, error_message, \
                started_at, completed_at, created_at \
         FROM scrape_runs \
         WHERE run_id = $1",
    )
    .bind(run_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// List recent runs, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_scrape_runs(pool: &PgPool, limit: i64) -> Result<Vec<ScrapeRunRow>, DbError> {
    let rows = sqlx::query_as::<_, ScrapeRunRow>(
        "SELECT id, run_id, region, status, trend_count, error_message, \
                started_at, completed_at, created_at \
         FROM scrape_runs \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
