//! Logging utilities
//!
//! Driver debug messages are forwarded through `log` as well, so the
//! default filter is `info` to keep diagnostics visible without setting
//! `RUST_LOG` explicitly.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
