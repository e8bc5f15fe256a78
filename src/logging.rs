use crate::cli::Args;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::constants::logging::{DEBUG_LEVEL, DEFAULT_LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging configuration for the application.
///
/// - Console logs always go to stderr; stdout is reserved for the result line
/// - `--debug` raises the crate level to `debug`, otherwise the config level is used
/// - `RUST_LOG` directives are honoured on top of that
/// - A log file is only written when `--log-file` or `log_file_path` is set
///
/// Returns the guard for the file writer, if any. It must be kept alive for
/// the duration of the program to ensure logs are flushed properly.
pub fn setup_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let level = if args.debug {
        DEBUG_LEVEL
    } else {
        config.log_level.as_str()
    };

    let console_layer = fmt::Layer::new()
        .with_writer(stderr)
        .with_target(false)
        .with_filter(build_filter(level)?);

    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    let (file_layer, guard) = match custom_log_path {
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

            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = RollingFileAppender::new(Rotation::NEVER, parent, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(build_filter(level)?);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    if let Some(path) = custom_log_path {
        tracing::info!("Logs are being written to: {path}");
    }

    Ok(guard)
}

/// Builds the filter for one layer: `RUST_LOG` plus the crate-level directive.
fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::logging::VALID_LEVELS;

    #[test]
    fn test_build_filter_accepts_valid_levels() {
        for level in VALID_LEVELS {
            assert!(build_filter(level).is_ok(), "level {level} should parse");
        }
    }
}
