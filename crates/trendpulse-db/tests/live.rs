//! Live integration tests for trendpulse-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/trendpulse-db/`), so `"../../migrations"` resolves to the
//! workspace migration directory.
//!
//! All tests are `#[ignore]`d by default; run them against a live server
//! with `DATABASE_URL` set and `cargo test -p trendpulse-db -- --ignored`.

use trendpulse_core::{EnrichedTrend, SentimentLabel, TrendMetadata, PLATFORM};
use trendpulse_db::{
    complete_scrape_run, create_scrape_run, fail_scrape_run, get_scrape_run, health_check,
    list_platform_trends, list_scrape_runs, replace_platform_trends, DbError,
};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_enriched(topic: &str, run_id: Uuid) -> EnrichedTrend {
    EnrichedTrend {
        platform: PLATFORM.to_string(),
        topic_hashtag: topic.to_string(),
        engagement_score: 2.5,
        sentiment_polarity: 0.0,
        sentiment_label: SentimentLabel::Neutral,
        posts: 1_000,
        views: 0,
        metadata: TrendMetadata {
            link: format!("https://twitter.com/search?q=%23{}", topic.trim_start_matches('#')),
            synthesized_content: format!("Trending discussion about {topic}."),
            raw_count: "1K".to_string(),
        },
        run_id,
    }
}

// ---------------------------------------------------------------------------
// Section 1: Scrape run lifecycle
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn scrape_run_lifecycle_running_to_completed(pool: sqlx::PgPool) {
    let run_id = Uuid::new_v4();
    let run = create_scrape_run(&pool, run_id, "india")
        .await
        .expect("create_scrape_run failed");

    assert_eq!(run.status, "running");
    assert_eq!(run.trend_count, 0);
    assert!(run.completed_at.is_none());

    complete_scrape_run(&pool, run_id, 7)
        .await
        .expect("complete_scrape_run failed");

    let fetched = get_scrape_run(&pool, run_id)
        .await
        .expect("get_scrape_run failed")
        .expect("run should exist");

    assert_eq!(fetched.status, "completed");
    assert_eq!(fetched.trend_count, 7);
    assert!(fetched.completed_at.is_some(), "completed_at should be set");
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn completing_a_completed_run_is_an_invalid_transition(pool: sqlx::PgPool) {
    let run_id = Uuid::new_v4();
    create_scrape_run(&pool, run_id, "india")
        .await
        .expect("create_scrape_run failed");
    complete_scrape_run(&pool, run_id, 3)
        .await
        .expect("first completion failed");

    let result = complete_scrape_run(&pool, run_id, 9).await;
    assert!(
        matches!(result, Err(DbError::InvalidRunTransition { run_id: r, .. }) if r == run_id),
        "expected InvalidRunTransition, got: {result:?}"
    );
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn failing_a_completed_run_is_an_invalid_transition(pool: sqlx::PgPool) {
    let run_id = Uuid::new_v4();
    create_scrape_run(&pool, run_id, "india")
        .await
        .expect("create_scrape_run failed");
    complete_scrape_run(&pool, run_id, 3)
        .await
        .expect("completion failed");

    let result = fail_scrape_run(&pool, run_id, "late failure").await;
    assert!(
        matches!(result, Err(DbError::InvalidRunTransition { .. })),
        "expected InvalidRunTransition, got: {result:?}"
    );
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn failing_a_running_run_records_the_message(pool: sqlx::PgPool) {
    let run_id = Uuid::new_v4();
    create_scrape_run(&pool, run_id, "india")
        .await
        .expect("create_scrape_run failed");

    fail_scrape_run(&pool, run_id, "all source URLs failed")
        .await
        .expect("fail_scrape_run failed");

    let fetched = get_scrape_run(&pool, run_id)
        .await
        .expect("get_scrape_run failed")
        .expect("run should exist");

    assert_eq!(fetched.status, "failed");
    assert_eq!(fetched.error_message.as_deref(), Some("all source URLs failed"));
    assert!(fetched.completed_at.is_some());
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn list_scrape_runs_returns_newest_first(pool: sqlx::PgPool) {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    create_scrape_run(&pool, first, "india")
        .await
        .expect("create first run failed");
    create_scrape_run(&pool, second, "india")
        .await
        .expect("create second run failed");

    let runs = list_scrape_runs(&pool, 10).await.expect("list_scrape_runs failed");
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].run_id, second);
    assert_eq!(runs[1].run_id, first);
}

// ---------------------------------------------------------------------------
// Section 2: Trend replacement
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn replacement_swaps_out_prior_rows_for_the_platform(pool: sqlx::PgPool) {
    let first_run = Uuid::new_v4();
    let inserted = replace_platform_trends(
        &pool,
        PLATFORM,
        &[
            make_enriched("#MumbaiRains", first_run),
            make_enriched("#DelhiNews", first_run),
        ],
    )
    .await
    .expect("first replacement failed");
    assert_eq!(inserted, 2);

    let second_run = Uuid::new_v4();
    let inserted = replace_platform_trends(&pool, PLATFORM, &[make_enriched("#IndiaWins", second_run)])
        .await
        .expect("second replacement failed");
    assert_eq!(inserted, 1);

    let rows = list_platform_trends(&pool, PLATFORM)
        .await
        .expect("list_platform_trends failed");
    assert_eq!(rows.len(), 1, "prior rows should have been replaced");
    assert_eq!(rows[0].topic_hashtag, "#IndiaWins");
    assert_eq!(rows[0].run_id, second_run);
    assert_eq!(rows[0].metadata["raw_count"], "1K");
}

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn empty_replacement_leaves_existing_rows_in_place(pool: sqlx::PgPool) {
    let run_id = Uuid::new_v4();
    replace_platform_trends(&pool, PLATFORM, &[make_enriched("#MumbaiRains", run_id)])
        .await
        .expect("seeding replacement failed");

    let inserted = replace_platform_trends(&pool, PLATFORM, &[])
        .await
        .expect("empty replacement failed");
    assert_eq!(inserted, 0);

    let rows = list_platform_trends(&pool, PLATFORM)
        .await
        .expect("list_platform_trends failed");
    assert_eq!(rows.len(), 1, "empty run must not wipe current rows");
}

// ---------------------------------------------------------------------------
// Section 3: Health
// ---------------------------------------------------------------------------

#[ignore = "requires a live Postgres via DATABASE_URL"]
#[sqlx::test(migrations = "../../migrations")]
async fn health_check_succeeds_on_a_live_pool(pool: sqlx::PgPool) {
    health_check(&pool).await.expect("health_check failed");
}
