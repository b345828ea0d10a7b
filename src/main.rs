use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

use mergington_api::{logging, web, AppConfig, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    logging::init_logging();

    // 2. Configuration and seeded in-memory state
    let config = AppConfig::from_env();
    let store = Store::seeded().into_shared();

    // 3. Router
    let app = web::router(store, &config.static_dir);

    // 4. Bind (with fallback port)
    let listener = match TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_port()
                .with_context(|| format!("cannot bind {}:{}: {}", config.host, config.port, e))?;
            warn!(
                host = %config.host,
                port = config.port,
                error = %e,
                fallback,
                "bind failed, trying fallback port"
            );
            TcpListener::bind((config.host.as_str(), fallback))
                .await
                .with_context(|| format!("cannot bind fallback {}:{}", config.host, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(static_dir = %config.static_dir.display(), "serving static files");
    info!("Server listening on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
