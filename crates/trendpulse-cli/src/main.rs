use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trendpulse")]
#[command(about = "Trending-topics scraper and enrichment pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape, enrich, and replace the platform's trend rows
    Run {
        /// Region page to scrape, overriding TRENDS_REGION
        #[arg(long)]
        region: Option<String>,
    },
    /// Scrape and enrich, printing the result without touching the database
    Preview {
        /// Region page to scrape, overriding TRENDS_REGION
        #[arg(long)]
        region: Option<String>,
    },
    /// Show recent scrape runs and the current trend rows
    Status {
        /// Show a single scrape run by its UUID
        #[arg(long)]
        run_id: Option<uuid::Uuid>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = trendpulse_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Run { region } => commands::run(&config, region.as_deref()).await,
        Commands::Preview { region } => commands::preview(&config, region.as_deref()).await,
        Commands::Status { run_id } => commands::status(&config, run_id).await,
        Commands::Migrate => commands::migrate(&config).await,
    }
}
