use anyhow::Result;
use clap::Parser;
use config::Config;
use handlers::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocalink::{config, handlers, portal::Portal, startup};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocalink=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse configuration from CLI args and environment variables
    let config = Config::parse();
    let base_url = config.get_base_url();

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found, stylesheet and images will 404",
            config.static_dir.display()
        );
    }

    let portal = Portal::new(config.variant);
    tracing::info!("Serving {:?} portal", portal.variant);

    let app_state = Arc::new(AppState {
        portal,
        base_url: base_url.clone(),
    });

    let app = startup::router(app_state, &config.static_dir);

    // Start server
    let addr = config.get_bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 VocaLink listening on http://{}", addr);
    tracing::info!("📍 Base URL: {}", base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
