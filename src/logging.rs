//! Tracing set-up. The TUI owns stdout, so events go to a daily-rolling file
//! in the cache directory instead of the console.

use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub const LOG_FILE_NAME: &str = "insta-login.log";
const DEFAULT_FILTER: &str = "info";

/// Check a `--log-level` value up front so clap reports a bad filter
/// instead of the program silently logging at `info`.
pub fn parse_log_filter(s: &str) -> Result<String, String> {
    EnvFilter::try_new(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("invalid log filter `{}`: {}", s, e))
}

/// Pick the filter: explicit `level`, then `RUST_LOG`, then `info`.
///
/// Also returns a warning when a filter was given but could not be parsed
/// and `info` is used instead.
pub fn build_filter(level: Option<&str>) -> (EnvFilter, Option<String>) {
    let (source, spec) = match level {
        Some(l) => ("--log-level", Some(l.to_string())),
        None => ("RUST_LOG", std::env::var(EnvFilter::DEFAULT_ENV).ok()),
    };
    match spec {
        Some(spec) => match EnvFilter::try_new(&spec) {
            Ok(filter) => (filter, None),
            Err(e) => (
                EnvFilter::new(DEFAULT_FILTER),
                Some(format!("ignoring {} `{}` ({}), logging at {}", source, spec, e, DEFAULT_FILTER)),
            ),
        },
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    }
}

/// Install the global subscriber writing into `log_dir`.
///
/// The returned guard flushes the background writer on drop; keep it alive
/// until the program exits.
pub fn init_logging(log_dir: &Path, level: Option<&str>) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let (filter, fallback) = build_filter(level);
    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer),
    );

    // Route `log` records from dependencies into tracing.
    tracing_log::LogTracer::init().context("Failed to install log bridge")?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    if let Some(warning) = fallback {
        tracing::warn!("{}", warning);
    }
    Ok(guard)
}
