use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use poem_engine::config::ServerConfig;
use poem_engine::core::generator::PoemGenerator;
use poem_engine::server::{poem_router, AppState, POEM_PATH};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pools = config.load_pools()?;
    info!(
        openers = pools.openers.len(),
        closers = pools.closers.len(),
        endings = pools.endings.len(),
        "phrase pools loaded"
    );
    for warning in pools.lint() {
        warn!("{}", warning);
    }

    if let Some(seed) = config.seed {
        info!(seed, "using fixed seed");
    }
    let state = AppState::new(PoemGenerator::new(pools)?, config.seed);
    let app = poem_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("serving POST {} on {}", POEM_PATH, listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
