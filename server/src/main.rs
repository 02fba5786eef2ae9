mod config;
mod error;
mod models;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogFormat, Settings};
use crate::services::signature::generate_secret;
use crate::services::validation::Sanitizer;
use crate::services::webhook::{ContactSink, WebhookClient, WebhookError};

const SWEEP_PERIOD: Duration = Duration::from_secs(300);

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("sanitizer patterns failed to compile: {0}")]
    Pattern(#[from] regex::Error),
    #[error("webhook client: {0}")]
    Webhook(#[from] WebhookError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "server", about = "Portfolio site and contact API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print a fresh random `WEBHOOK_SECRET`.
    GenerateSecret,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::GenerateSecret => {
            println!("WEBHOOK_SECRET={}", generate_secret());
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn serve() -> Result<(), ServerError> {
    let settings = Settings::from_env()?;
    init_tracing(settings.log_format);

    let sink: Option<Arc<dyn ContactSink>> = match settings.webhook.url.as_deref() {
        Some(url) => {
            let client = WebhookClient::new(url, &settings.webhook, settings.api_version.clone())?;
            tracing::info!(signed = settings.webhook.signature_enabled(), "webhook delivery enabled");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("WEBHOOK_URL not set; contact submissions will be refused");
            None
        }
    };

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    let state = state::AppState::new(settings, Sanitizer::new()?, sink);
    let _sweeper = rate_limit::spawn_sweeper(state.rate_limiter.clone(), SWEEP_PERIOD);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos site unavailable; serving API only");
            routes::app(state)
        }
    };

    tracing::info!(addr = %listener.local_addr()?, "portfolio server listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
