use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Compact stderr output, plus a JSON file when a path is given
    Stderr(Option<PathBuf>),
    /// JSON file only; used while the TUI owns the terminal
    FileOnly(PathBuf),
}

/// Default log file for interactive sessions, under the platform data dir
pub fn default_log_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "taskcat")
        .map(|dirs| dirs.data_local_dir().join("taskcat.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("taskcat.log"))
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taskcat={}", default_level)))
}

fn file_appender(log_path: &std::path::Path) -> tracing_appender::rolling::RollingFileAppender {
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    tracing_appender::rolling::daily(
        log_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("taskcat.log")),
    )
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `target` - Stderr (optionally mirrored to a file) or file only
pub fn init(verbose: bool, target: LogTarget) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    match target {
        LogTarget::Stderr(log_file) => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact();
            let registry = registry.with(stderr_layer);

            if let Some(log_path) = log_file {
                let file_layer = fmt::layer()
                    .with_writer(file_appender(&log_path))
                    .with_ansi(false)
                    .json();
                let _ = registry.with(file_layer).try_init();
            } else {
                let _ = registry.try_init();
            }
        }
        LogTarget::FileOnly(log_path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(&log_path))
                .with_ansi(false)
                .json();
            let _ = registry.with(file_layer).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_log_file_name() {
        let path = default_log_file();
        assert_eq!(path.file_name().unwrap(), "taskcat.log");
    }

    #[test]
    fn test_init_after_global_subscriber_is_harmless() {
        init_test_logging();
        // Second initialisation must not panic
        init(true, LogTarget::Stderr(None));
    }
}
