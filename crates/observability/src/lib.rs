//! Tracing and logging setup shared by hosts embedding the order domain.
//!
//! The domain crates only emit `tracing` events (notices, applied order
//! events); installing a subscriber is left to the host through this crate.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&tracing::TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, init_with};
