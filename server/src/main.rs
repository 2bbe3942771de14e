mod auth;
mod config;
mod error;
mod lists;
mod routes;
mod state;
mod store;
mod words;
mod ws;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use config::{generate_config_template, Config};
use state::AppState;
use store::WordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config with layered precedence: defaults < TOML < env < CLI
    let config = Config::load()?;

    // Handle --generate-config: print template and exit
    if config.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "wordwall_server=info".parse().unwrap()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "wordwall_server=info".parse().unwrap()),
            )
            .init();
    }

    tracing::info!(
        "wordwall server v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    // The store starts with the seeded default list; everything else is
    // created at runtime through the admin API. Nothing persists across
    // restarts.
    let store = Arc::new(WordStore::seeded());
    let state = AppState {
        store,
        admin_password: Arc::new(config.admin_password.clone()),
    };

    let app = routes::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("HTTP listener on http://{}", addr);
    tracing::info!("WebSocket endpoint on ws://{}/ws", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
