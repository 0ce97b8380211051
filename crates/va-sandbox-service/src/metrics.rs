//! Prometheus metrics for the sandbox service.
//!
//! HTTP-level metrics are recorded by
//! [`RequestLoggerLayer`](crate::middleware::RequestLoggerLayer); the helpers
//! here count business outcomes per endpoint.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);
        let path = lookup("METRICS_PATH")
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Install the Prometheus recorder.
///
/// Must be called before any metric is recorded; later calls fail.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the metrics endpoint, in Prometheus exposition format.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Currencies reported under their own label; everything else is "other".
pub const KNOWN_CURRENCIES: [&str; 3] = ["IDR", "USD", "SGD"];

/// Map a client-supplied currency onto the fixed label set.
pub fn currency_label(currency: &str) -> &'static str {
    KNOWN_CURRENCIES
        .into_iter()
        .find(|known| *known == currency)
        .unwrap_or("other")
}

/// Count a virtual account accepted by the create endpoint.
pub fn record_va_created(currency: &str) {
    metrics::counter!(
        "va_sandbox_va_created_total",
        "currency" => currency_label(currency)
    )
    .increment(1);
}

pub fn record_va_deleted() {
    metrics::counter!("va_sandbox_va_deleted_total").increment(1);
}

pub fn record_status_inquiry() {
    metrics::counter!("va_sandbox_status_inquiries_total").increment(1);
}

/// Count a request rejected before a success envelope was built.
///
/// # Arguments
///
/// * `endpoint` - "create" or "delete"
/// * `reason` - "missing_header", "invalid_json" or "missing_field"
pub fn record_validation_failed(endpoint: &str, reason: &str) {
    metrics::counter!(
        "va_sandbox_validation_failures_total",
        "endpoint" => endpoint.to_string(),
        "reason" => reason.to_string()
    )
    .increment(1);
}
