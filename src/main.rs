use anyhow::Context;
use clap::Parser;
use phonebook::api::build_router;
use phonebook::config::Args;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let settings = args.resolve()?;

    // 1. Storage:
    let store = settings
        .backend
        .open()
        .with_context(|| format!("Failed to open {:?} store", settings.backend))?;
    tracing::info!(
        "Using {} store with {} contacts",
        store.kind(),
        store.count().await?
    );

    // 2. HTTP Router:
    let app = build_router(store);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(settings.listen)
        .await
        .with_context(|| format!("Failed to bind {}", settings.listen))?;

    tracing::info!("Server running on {}", settings.listen);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
