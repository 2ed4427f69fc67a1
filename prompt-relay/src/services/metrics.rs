use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the process-wide Prometheus recorder, or return the one already
/// installed. `None` if another recorder owns the global slot.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if let Some(handle) = HANDLE.get() {
        return Some(handle.clone());
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(HANDLE.get_or_init(|| handle).clone()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            HANDLE.get().cloned()
        }
    }
}
