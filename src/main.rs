//! Process entry point: load settings, initialize tracing, construct the
//! completion client, and run the API server.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use careloom::api::server;
use careloom::config::{self, Settings};
use careloom::planner::{AnthropicClient, CompletionClient};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter())),
        )
        .init();

    tracing::info!("Starting {} v{}", config::APP_NAME, config::APP_VERSION);
    tracing::info!(environment = %settings.environment, "Environment");
    tracing::info!(origins = ?settings.cors_origins, "CORS origins");
    if settings.sentry_dsn.is_some() {
        tracing::info!("Telemetry endpoint configured");
    }

    let client: Arc<dyn CompletionClient> = Arc::new(AnthropicClient::new(
        settings.anthropic_api_key.clone(),
        settings.claude_timeout_secs,
    ));

    if let Err(e) = server::run(settings, client).await {
        tracing::error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutting down");
    ExitCode::SUCCESS
}
