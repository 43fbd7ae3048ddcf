use anyhow::Context;

use prodclean_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prodclean_observability::init();

    let config = ApiConfig::from_env().context("invalid server configuration")?;
    let app = prodclean_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(config.bind_target())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
