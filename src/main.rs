use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_browser::catalog::Catalog;
use catalog_browser::config::Config;
use catalog_browser::web;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting catalog-browser");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        catalog_path = %config.catalog_path.display(),
        per_page = config.per_page,
        shield_mode = ?config.shield_mode,
        "Configuration loaded"
    );

    let catalog = Catalog::load(&config.catalog_path).context("Failed to load catalog")?;
    info!(items = catalog.len(), "Catalog loaded");

    web::serve(config, catalog).await
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog_browser=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(())
}
