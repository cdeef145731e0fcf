//! Command handlers: full run, offline preview, and migrations.

use anyhow::Context;
use trendpulse_core::{AppConfig, EnrichedTrend, PLATFORM};
use trendpulse_db::PoolConfig;
use trendpulse_enrich::enrich;
use trendpulse_scraper::{ExtractOptions, TrendsClient};
use uuid::Uuid;

fn extract_options(config: &AppConfig) -> ExtractOptions {
    ExtractOptions {
        max_trends: config.max_trends,
        relevance_grace: config.relevance_grace,
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<TrendsClient> {
    TrendsClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")
}

/// Scrape the configured region, enrich, and replace the platform's rows.
/// The run lifecycle is recorded in `scrape_runs`; a failure after the run
/// row exists marks it failed before the error propagates.
pub async fn run(config: &AppConfig, region_override: Option<&str>) -> anyhow::Result<()> {
    let region = region_override.unwrap_or(&config.trends_region);
    let run_id = Uuid::new_v4();
    tracing::info!(%run_id, region, "starting trend scrape run");

    let pool = trendpulse_db::connect_pool(&config.database_url, PoolConfig::from_app_config(config))
        .await
        .context("failed to connect to Postgres")?;
    trendpulse_db::health_check(&pool)
        .await
        .context("database is unreachable")?;

    let client = build_client(config)?;

    trendpulse_db::create_scrape_run(&pool, run_id, region)
        .await
        .context("failed to record scrape run")?;

    let raw = match client.fetch_trends(region, extract_options(config)).await {
        Ok(raw) => raw,
        Err(e) => {
            fail_run_best_effort(&pool, run_id, &format!("{e:#}")).await;
            return Err(e).context("trend fetch failed on every source URL");
        }
    };
    tracing::info!(count = raw.len(), "scraped raw trends");

    let enriched = enrich(&raw, run_id);
    for trend in &enriched {
        tracing::info!(
            topic = %trend.topic_hashtag,
            score = trend.engagement_score,
            sentiment = %trend.sentiment_label,
            posts = trend.posts,
            "enriched trend"
        );
    }

    let inserted = match trendpulse_db::replace_platform_trends(&pool, PLATFORM, &enriched).await {
        Ok(n) => n,
        Err(e) => {
            fail_run_best_effort(&pool, run_id, &format!("{e:#}")).await;
            return Err(e).context("failed to replace platform trends");
        }
    };

    let trend_count = i32::try_from(inserted).unwrap_or(i32::MAX);
    trendpulse_db::complete_scrape_run(&pool, run_id, trend_count)
        .await
        .context("failed to mark scrape run completed")?;

    tracing::info!(%run_id, inserted, "scrape run completed");
    Ok(())
}

/// Scrape and enrich, printing the table that `run` would insert.
pub async fn preview(config: &AppConfig, region_override: Option<&str>) -> anyhow::Result<()> {
    let region = region_override.unwrap_or(&config.trends_region);
    let client = build_client(config)?;

    let raw = client
        .fetch_trends(region, extract_options(config))
        .await
        .context("trend fetch failed on every source URL")?;
    let enriched = enrich(&raw, Uuid::new_v4());

    println!("{} trends for region '{region}':", enriched.len());
    for trend in &enriched {
        print_trend(trend);
    }
    Ok(())
}

/// Read back the store: a single run by UUID, or recent runs plus the
/// current trend rows for the platform.
pub async fn status(config: &AppConfig, run_id: Option<Uuid>) -> anyhow::Result<()> {
    let pool = trendpulse_db::connect_pool(&config.database_url, PoolConfig::from_app_config(config))
        .await
        .context("failed to connect to Postgres")?;

    if let Some(run_id) = run_id {
        match trendpulse_db::get_scrape_run(&pool, run_id)
            .await
            .context("failed to fetch scrape run")?
        {
            Some(run) => print_run(&run),
            None => println!("no scrape run found for {run_id}"),
        }
        return Ok(());
    }

    let runs = trendpulse_db::list_scrape_runs(&pool, 10)
        .await
        .context("failed to list scrape runs")?;
    println!("{} recent scrape run(s):", runs.len());
    for run in &runs {
        print_run(run);
    }

    let rows = trendpulse_db::list_platform_trends(&pool, PLATFORM)
        .await
        .context("failed to list platform trends")?;
    println!("{} current trend row(s) for {PLATFORM}:", rows.len());
    for row in &rows {
        println!(
            "  {:<28} score {:>5.2}  {:<8} posts {:>8}  run {}",
            row.topic_hashtag, row.engagement_score, row.sentiment_label, row.posts, row.run_id,
        );
    }
    Ok(())
}

/// Apply pending migrations and report how many ran.
pub async fn migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = trendpulse_db::connect_pool(&config.database_url, PoolConfig::from_app_config(config))
        .await
        .context("failed to connect to Postgres")?;
    let applied = trendpulse_db::run_migrations(&pool)
        .await
        .context("migrations failed")?;
    println!("applied {applied} migration(s)");
    Ok(())
}

fn print_run(run: &trendpulse_db::ScrapeRunRow) {
    println!(
        "  {}  {:<9} region {:<14} trends {:>3}  started {}",
        run.run_id, run.status, run.region, run.trend_count, run.started_at,
    );
    if let Some(message) = &run.error_message {
        println!("      error: {message}");
    }
}

fn print_trend(trend: &EnrichedTrend) {
    println!(
        "  {:<28} score {:>5.2}  {:<8} posts {:>8}  {}",
        trend.topic_hashtag,
        trend.engagement_score,
        trend.sentiment_label.as_str(),
        trend.posts,
        trend.metadata.raw_count,
    );
}

async fn fail_run_best_effort(pool: &sqlx::PgPool, run_id: Uuid, message: &str) {
    if let Err(e) = trendpulse_db::fail_scrape_run(pool, run_id, message).await {
        tracing::error!(%run_id, error = %e, "could not mark scrape run as failed");
    }
}
