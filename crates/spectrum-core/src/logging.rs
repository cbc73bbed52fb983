//! Logging configuration.
//!
//! Holds the settings the binary uses to build its tracing subscriber, plus
//! the file housekeeping that goes with file output (directory creation,
//! timestamped file names, rotation by count).

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn or error
    pub level: String,
    /// Write logs to stderr
    pub console_output: bool,
    /// Write logs to a file under `log_dir`
    pub file_output: bool,
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Number of log files kept on cleanup
    pub max_files: usize,
    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: false,
            log_dir: PathBuf::from("logs"),
            max_files: 5,
            file_prefix: "spectrum".to_string(),
        }
    }
}

impl LogConfig {
    /// Level filter for `level`, INFO if unrecognized
    pub fn parse_level(&self) -> LevelFilter {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::OFF,
            "error" => LevelFilter::ERROR,
            "warn" | "warning" => LevelFilter::WARN,
            "info" => LevelFilter::INFO,
            "debug" => LevelFilter::DEBUG,
            "trace" => LevelFilter::TRACE,
            _ => LevelFilter::INFO,
        }
    }

    /// Create the log directory if file output is enabled
    pub fn ensure_log_directory(&self) -> io::Result<()> {
        if self.file_output {
            fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }

    /// Path of the log file for a run started now
    pub fn current_log_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
        self.log_dir
            .join(format!("{}_{}.log", self.file_prefix, stamp))
    }

    /// Delete the oldest log files beyond `max_files`, returning how many
    /// were removed
    pub fn cleanup_old_logs(&self) -> io::Result<usize> {
        if !self.log_dir.exists() {
            return Ok(0);
        }

        let prefix = format!("{}_", self.file_prefix);
        let mut logs = fs::read_dir(&self.log_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "log")
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect::<Vec<_>>();

        if logs.len() <= self.max_files {
            return Ok(0);
        }

        // Timestamped names sort chronologically
        logs.sort();
        let excess = logs.len() - self.max_files;
        for path in &logs[..excess] {
            fs::remove_file(path)?;
        }
        Ok(excess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> LogConfig {
        LogConfig {
            file_output: true,
            log_dir: dir.join("logs"),
            max_files: 2,
            ..LogConfig::default()
        }
    }

    #[test]
    fn test_parse_level() {
        let mut config = LogConfig::default();
        assert_eq!(config.parse_level(), LevelFilter::INFO);

        config.level = "DEBUG".to_string();
        assert_eq!(config.parse_level(), LevelFilter::DEBUG);

        config.level = "loud".to_string();
        assert_eq!(config.parse_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_log_path_uses_prefix() {
        let config = LogConfig::default();
        let path = config.current_log_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("spectrum_"));
        assert!(name.ends_with(".log"));
        assert!(path.starts_with("logs"));
    }

    #[test]
    fn test_ensure_directory_only_for_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());

        config.file_output = false;
        config.ensure_log_directory().unwrap();
        assert!(!config.log_dir.exists());

        config.file_output = true;
        config.ensure_log_directory().unwrap();
        assert!(config.log_dir.is_dir());
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        config.ensure_log_directory().unwrap();

        for stamp in ["2026-01-01", "2026-01-02", "2026-01-03", "2026-01-04"] {
            fs::write(config.log_dir.join(format!("spectrum_{stamp}.log")), "").unwrap();
        }
        fs::write(config.log_dir.join("other_2026-01-01.log"), "").unwrap();

        assert_eq!(config.cleanup_old_logs().unwrap(), 2);
        assert!(!config.log_dir.join("spectrum_2026-01-01.log").exists());
        assert!(config.log_dir.join("spectrum_2026-01-04.log").exists());
        assert!(config.log_dir.join("other_2026-01-01.log").exists());
        assert_eq!(config.cleanup_old_logs().unwrap(), 0);
    }

    #[test]
    fn test_cleanup_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(config_in(dir.path()).cleanup_old_logs().unwrap(), 0);
    }
}
