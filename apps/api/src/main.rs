mod catalog;
mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod pages;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::signal;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::chat::proxy::{ChatProxy, CredentialSource, EnvCredentials};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio server v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    info!("Project catalog ready ({} projects)", catalog.projects().len());

    let llm = LlmClient::new(config.openai_base_url.clone(), config.openai_model.clone())?;
    info!("LLM client initialized (model: {})", llm.model());

    let credentials = EnvCredentials;
    if credentials.api_key().is_none() {
        warn!("OPENAI_API_KEY is not set; chat will answer with the offline reply");
    }

    let chat = ChatProxy::new(Arc::new(llm), Arc::new(credentials), &config.display_name);

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; /static will return 404",
            config.static_dir.display()
        );
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
        chat,
    };

    let app = build_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
