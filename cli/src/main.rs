use std::sync::Arc;

use anyhow::Result;
use appconfig::{ConfigService, HttpConfigFetcher};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Fetch the runtime configuration an application origin serves and print
/// the values the application would resolve. Exits successfully even when
/// the load degrades to defaults; the degradation shows up in the log.
#[derive(Parser)]
#[command(name = "appconfig", version)]
struct Cli {
    #[arg(
        long,
        env = "APPCONFIG_BASE_URL",
        help = "Application origin to load from, e.g. https://app.example.com"
    )]
    base_url: String,

    #[arg(long, help = "Output as JSON")]
    json: bool
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let service = ConfigService::new(Arc::new(HttpConfigFetcher::new(cli.base_url)));
    service.load().await;

    if cli.json {
        let output = serde_json::json!({
            "api_url": service.api_url(),
            "production": service.is_production()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("api_url:    {}", service.api_url());
    println!("production: {}", service.is_production());

    Ok(())
}
