use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup. `RUST_LOG` overrides
/// the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("watchtower_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log upstream API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log feed assembly
    pub fn feed_assembled(region: &str, kind: &str, sources_ok: usize, items: usize) {
        info!(
            "Feed: {}/{} assembled from {} source(s), {} items",
            region, kind, sources_ok, items
        );
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    provider: String,
    endpoint: String,
}

impl TimedOperation {
    pub fn new(provider: &str, endpoint: &str) -> Self {
        LogContext::api_call(provider, endpoint, "", None);
        Self {
            start: std::time::Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn finish(self, status: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::api_call(&self.provider, &self.endpoint, status, Some(duration));
        duration
    }
}
