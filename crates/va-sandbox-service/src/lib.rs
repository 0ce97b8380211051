//! HTTP sandbox for the virtual-account transfer API.
//!
//! Thin axum glue over `va-sandbox-lib`:
//!
//! - [`handlers`]: create, delete and status endpoints
//! - [`middleware`]: request start/end logging and HTTP metrics
//! - [`logging`]: structured JSON or text logging setup
//! - [`metrics`]: Prometheus recorder and business counters
//! - [`config`]: bootstrap configuration from the environment
//!
//! # Endpoints
//!
//! - `POST /v1.0/transfer-va/create-va`
//! - `DELETE /v1.0/transfer-va/delete-va`
//! - `POST /v1.0/transfer-va/status`
//! - `GET /health/live`
//! - `GET /metrics` (path configurable)

pub mod config;
pub mod handlers;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{delete, get, post},
    Router,
};

pub use crate::metrics::{init_metrics, metrics_handler, MetricsConfig, MetricsError};
pub use config::ServiceConfig;
pub use health::{health_live, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{RequestId, RequestLoggerLayer};

pub const CREATE_VA_PATH: &str = "/v1.0/transfer-va/create-va";
pub const DELETE_VA_PATH: &str = "/v1.0/transfer-va/delete-va";
pub const STATUS_VA_PATH: &str = "/v1.0/transfer-va/status";

/// Build the route table, wrapped in the request logger.
///
/// Called once at startup; the metrics route is only mounted when enabled.
pub fn build_router(metrics: &MetricsConfig) -> Router {
    let mut router = Router::new()
        .route(CREATE_VA_PATH, post(handlers::create_va))
        .route(DELETE_VA_PATH, delete(handlers::delete_va))
        .route(STATUS_VA_PATH, post(handlers::status_va))
        .route("/health/live", get(health_live));

    if metrics.enabled {
        router = router.route(&metrics.path, get(metrics_handler));
    }

    router.layer(RequestLoggerLayer)
}
