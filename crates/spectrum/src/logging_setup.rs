//! Global tracing subscriber for the recorder.

use anyhow::{Context, Result};
use spectrum_core::logging::LogConfig;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Keeps the file writer flushing until the recording ends
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
    log_file: Option<PathBuf>,
}

impl LogGuard {
    /// File receiving log output, if file logging is on
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Install the global subscriber described by `config`.
///
/// Must be called at most once per process.
pub fn init(config: &LogConfig) -> Result<LogGuard> {
    let filter = level_filter(config);

    let console = config.console_output.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter.clone())
    });

    let mut guard = LogGuard {
        _worker: None,
        log_file: None,
    };
    let file = match open_log_file(config)? {
        Some((file, path)) => {
            let (writer, worker) = tracing_appender::non_blocking(file);
            guard = LogGuard {
                _worker: Some(worker),
                log_file: Some(path),
            };
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(guard)
}

/// Configured level, overridden by RUST_LOG when set
fn level_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(config.parse_level().into())
        .from_env_lossy()
}

/// Create this run's log file after pruning old ones; `None` without file output
fn open_log_file(config: &LogConfig) -> Result<Option<(File, PathBuf)>> {
    if !config.file_output {
        return Ok(None);
    }
    config
        .ensure_log_directory()
        .with_context(|| format!("Failed to create log directory {:?}", config.log_dir))?;

    // Rotation trouble must not stop a recording
    if let Err(e) = config.cleanup_old_logs() {
        eprintln!("Warning: failed to prune old log files: {}", e);
    }

    let path = config.current_log_path();
    let file =
        File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;
    Ok(Some((file, path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_console_only_opens_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            log_dir: dir.path().join("logs"),
            ..LogConfig::default()
        };
        assert!(open_log_file(&config).unwrap().is_none());
        assert!(!config.log_dir.exists());
    }

    #[test]
    fn test_file_output_prunes_then_creates() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file_output: true,
            log_dir: dir.path().join("logs"),
            max_files: 1,
            ..LogConfig::default()
        };
        fs::create_dir_all(&config.log_dir).unwrap();
        for day in ["2020-01-01", "2020-01-02"] {
            fs::write(config.log_dir.join(format!("spectrum_{day}.log")), "").unwrap();
        }

        let (_file, path) = open_log_file(&config).unwrap().unwrap();
        assert!(path.exists());
        assert!(path.starts_with(&config.log_dir));
        assert!(!config.log_dir.join("spectrum_2020-01-01.log").exists());
        assert!(config.log_dir.join("spectrum_2020-01-02.log").exists());
    }
}
