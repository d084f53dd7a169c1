use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use marquee_config::{ConfigLoad, ConfigLoader, ConfigWarnings};
use marquee_core::{CatalogService, RetryPolicy, RetryingCatalog, TmdbCatalog};
use marquee_player::BrowseSettings;
use marquee_player::cli::{self, Cli};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    debug!(source = ?config.metadata.source, "configuration source");
    log_warnings(&warnings);

    let tmdb_settings = config
        .catalog
        .tmdb_settings()
        .context("catalog is not configured")?;
    let tmdb = TmdbCatalog::new(tmdb_settings)
        .context("failed to build the TMDB client")?;
    let catalog: Arc<dyn CatalogService> = Arc::new(RetryingCatalog::new(
        tmdb,
        RetryPolicy::from(&config.catalog.retry),
    ));

    let output = cli::execute(
        &cli.command,
        cli.json,
        catalog,
        BrowseSettings::from(&config),
    )
    .await?;
    print!("{output}");
    Ok(())
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}
