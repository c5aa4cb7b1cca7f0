use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "fcz_stats.log";
const DEFAULT_DIRECTIVE: &str = "fcz_stats=info";

/// Splits the log location into directory and file name.
///
/// The CLI flag wins over the configured path; without either the platform
/// log directory is used.
pub fn resolve_log_location(args: &Args, config_log_path: Option<&String>) -> (String, String) {
    match args.log_file.as_ref().or(config_log_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (
            Config::get_log_dir_path(),
            DEFAULT_LOG_FILE_NAME.to_string(),
        ),
    }
}

fn env_filter() -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match DEFAULT_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Active logging outputs. Keep it alive for the duration of the program,
/// otherwise buffered file lines are lost.
pub struct LogSession {
    /// Path of the log file, `None` when file logging could not be started.
    pub log_file_path: Option<String>,
    _guard: Option<WorkerGuard>,
}

/// Opens the daily rolling log file, creating its directory when missing.
pub async fn open_log_file(log_dir: &str, log_file_name: &str) -> Result<RollingFileAppender, AppError> {
    if !Path::new(log_dir).exists() {
        tokio::fs::create_dir_all(log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory '{log_dir}': {e}"))
        })?;
    }

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name)
        .build(log_dir)
        .map_err(|e| AppError::log_setup_error(format!("Failed to open log file in '{log_dir}': {e}")))
}

/// Sets up logging configuration for the application.
///
/// - Logs to a daily rolling file when the log location is usable
/// - Debug mode additionally logs to stderr, stdout is reserved for the page
/// - An unusable log location is reported on stderr and file logging is skipped
///
/// Fails only when a global subscriber is already installed.
pub async fn setup_logging(
    args: &Args,
    config_log_path: Option<&String>,
) -> Result<LogSession, AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config_log_path);

    let (file_layer, guard, log_file_path) = match open_log_file(&log_dir, &log_file_name).await {
        Ok(file_appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter());
            (Some(layer), Some(guard), Some(format!("{log_dir}/{log_file_name}")))
        }
        Err(e) => {
            eprintln!("Warning: {e}. Continuing without a log file.");
            (None, None, None)
        }
    };

    let stderr_layer = args.debug.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(env_filter())
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    Ok(LogSession {
        log_file_path,
        _guard: guard,
    })
}
