use std::net::SocketAddr;
use std::sync::Arc;

use hello_kubernetes::prelude::*;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();

    if config.database_url.is_some() {
        tracing::info!("DATABASE_URL is set");
    } else {
        tracing::info!("DATABASE_URL is not set");
    }

    // Создаём реестр метрик
    let metrics = MetricsRegistry::new();

    // Создаём состояние приложения
    let state = Arc::new(AppState {
        config: config.clone(),
        metrics,
    });

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    // Создание router
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    // Настройка адреса для прослушивания
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Hello Kubernetes service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Greeting");
    tracing::info!("  - GET /healthz - Health check");
    tracing::info!("  - GET /livez   - Liveness probe");
    tracing::info!("  - GET /readyz  - Readiness probe");
    if config.metrics_enabled {
        tracing::info!("  - GET /metrics - Prometheus metrics");
    } else {
        tracing::info!("Metrics endpoint disabled via METRICS_ENABLED");
    }

    // Запуск сервера с graceful shutdown
    let mut serve_shutdown_rx = shutdown_rx.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = serve_shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // Используем EnvFilter::from_default_env() для правильной обработки RUST_LOG
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
