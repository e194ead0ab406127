use document_ingestion::config::ServerConfig;
use document_ingestion::ingestion::engine::LifecycleEngine;
use document_ingestion::ingestion::registry::ProcessorRegistry;
use document_ingestion::server::{build_router, spawn_stats_reporter};
use document_ingestion::storage::memory::DocumentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = ServerConfig::load()?;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let Some(addr) = args.get(i + 1) else {
                    eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                    std::process::exit(1);
                };
                config.bind_addr = addr.clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bind_addr = config.socket_addr()?;

    // 1. Storage layer:
    let store = Arc::new(DocumentStore::new());

    // 2. Lifecycle engine:
    let processors = ProcessorRegistry::with_defaults();
    tracing::info!("Registered {} document processors", processors.processor_count());
    let engine = LifecycleEngine::new(store.clone(), processors, config.engine_config());

    // 3. Stats reporter:
    if let Some(interval) = config.stats_interval() {
        spawn_stats_reporter(store.clone(), interval);
    }

    // 4. HTTP server:
    let app = build_router(engine);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!(
        "Processing delay: {}ms",
        config.processing_delay().as_millis()
    );

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
