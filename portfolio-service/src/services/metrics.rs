//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.
//! Recording before [`init_metrics`] is a no-op.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Call once at startup before any metrics are recorded.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    METRICS_HANDLE.set(handle).map_err(|_| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to set metrics handle: already initialized"
        ))
    })
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// outcome: success, provider_error, unconfigured
pub fn record_chat_outcome(outcome: &'static str) {
    counter!("chat_requests_total", "outcome" => outcome).increment(1);
}

pub fn record_provider_latency(provider: &'static str, elapsed: Duration) {
    histogram!("chat_provider_latency_seconds", "provider" => provider)
        .record(elapsed.as_secs_f64());
}

pub fn record_provider_error(provider: &'static str, error_type: &'static str) {
    counter!(
        "chat_provider_errors_total",
        "provider" => provider,
        "error_type" => error_type
    )
    .increment(1);
}
