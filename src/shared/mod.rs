// Shared kernel: errors, configuration and logging used by every module

pub mod config; // Environment-driven runtime configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use config::{AppConfig, UpstreamEndpoints};
pub use errors::{AppError, AppResult};
