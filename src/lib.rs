pub mod api;
pub mod components;
pub mod config;
pub mod console;
pub mod models;
pub mod pages;
pub mod router;
pub mod shell;

use tracing_subscriber::EnvFilter;

use crate::api::{ApiError, HttpClient};
use crate::config::ApiConfig;
use crate::shell::Shell;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to build API client: {0}")]
    Client(#[from] ApiError),
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub async fn run() -> Result<(), StartupError> {
    // stdout belongs to the console
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let api_config = ApiConfig::from_env();
    tracing::info!(base_url = %api_config.base_url, "Using API");

    let client = HttpClient::new(&api_config).map_err(|e| {
        tracing::error!(error = %e, "Failed to build API client");
        e
    })?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    Shell::new(client).run(stdin, stdout).await?;

    tracing::info!("{} exiting", config::APP_NAME);
    Ok(())
}
