// Omnifetch Library - Public API

// Re-export error types
pub mod error;
pub use error::{FetchError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::FetchConfig;

/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV: &str = "OMNIFETCH_LOG";

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}
