//! Virtual-account sandbox HTTP service.
//!
//! # Configuration
//!
//! - `SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `SERVICE_PORT` - HTTP port (default: 7000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint

use std::net::SocketAddr;

use tracing::{error, info, warn};

use va_sandbox_service::{build_router, init_logging, init_metrics, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServiceConfig::from_env();
    config.logging = config.logging.with_default_service(env!("CARGO_PKG_NAME"));
    init_logging(&config.logging);

    if config.metrics.enabled {
        if let Err(e) = init_metrics(&config.metrics) {
            warn!(error = %e, "failed to initialize metrics, continuing without metrics");
        }
    }

    let app = build_router(&config.metrics);

    let addr = config.socket_addr();
    info!(
        service = config.logging.service.as_deref().unwrap_or("-"),
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        "starting virtual-account sandbox"
    );

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listener");
        e
    })?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
