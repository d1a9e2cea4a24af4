//! Compatibility bridges routing other logging crates into the facade

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;
