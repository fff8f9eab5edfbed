//! Logging setup.
//!
//! Logs go to stderr so stdout carries only prompts and the report. The level
//! defaults to `warn` and can be raised with `RUST_LOG` (e.g. `RUST_LOG=dejager=debug`).

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub fn init() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}
