use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::ServerConfig;
use activities::database::ActivityDirectory;
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + directory
    let config = ServerConfig::from_env().context("invalid server configuration")?;
    if !config.static_dir.is_dir() {
        warn!(
            static_dir = %config.static_dir.display(),
            "static directory not found; the landing page will 404"
        );
    }

    let directory = Arc::new(ActivityDirectory::seeded()?);
    info!(
        activities = directory.len(),
        version = env!("CARGO_PKG_VERSION"),
        "activity directory loaded"
    );
    for name in directory.names() {
        info!(activity = %name, "activity available");
    }

    // 3. App
    let app = web::build_router(directory, &config);

    // 4. Bind, with one fallback port
    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .ok_or_else(|| anyhow::anyhow!("cannot bind {}: {}", addr, e))??;
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("open http://{}{} to get started", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await?;
    Ok(())
}
