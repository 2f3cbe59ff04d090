//! Logging utilities
//!
//! The terminal belongs to the UI, so every record goes to a file instead.

use std::fs::{self, File};
use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Where `initialize_logging` writes.
pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Picks the first of `RUST_LOG`, then `HELLONEWS_LOGLEVEL`, then `hellonews=info`.
fn filter_directive(rust_log: Option<String>, app_log: Option<String>) -> String {
    rust_log
        .or(app_log)
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Sends `log` and `tracing` records to `<data dir>/hellonews.log`.
pub fn initialize_logging() -> Result<()> {
    let path = log_path();
    if let Some(directory) = path.parent() {
        fs::create_dir_all(directory)?;
    }
    let log_file = File::create(&path)?;

    let directive = filter_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}
