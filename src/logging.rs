//! File logging. The terminal belongs to the UI, so everything goes to a daily
//! rolling file under `<data_dir>/logs`.
//!
//! The filter comes from `FOLIO_LOG`, then `RUST_LOG`, then the configured
//! level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Must be kept alive for the duration of the program; dropping it flushes
/// the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

pub fn init(data_dir: Option<&Path>, default_level: &str) -> LoggingGuard {
    let filter = std::env::var("FOLIO_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    let Some(dir) = data_dir else {
        // No place to write; leave the global subscriber unset.
        return LoggingGuard { _file_guard: None };
    };

    let log_dir = dir.join("logs");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return LoggingGuard { _file_guard: None };
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");

    LoggingGuard {
        _file_guard: Some(guard),
    }
}
