use std::net::SocketAddr;

use anyhow::Context;

use widget_service::{
    app::build_app, config::AppConfig, db::connection, logging::init_tracing, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("server failed: {err:?}");
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging.rust_log);

    let db = connection::connect(&cfg.database, cfg.general.debug).await?;
    let state = AppState::new(cfg, db);
    let app = build_app(state.clone());

    let general = &state.config.general;
    let listener = tokio::net::TcpListener::bind((general.host.as_str(), general.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", general.host, general.port))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(
        app = %general.app_name,
        version = %general.app_version,
        "listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
