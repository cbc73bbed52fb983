//! JSON configuration files.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a configuration value from a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    debug!("Loaded configuration from {:?}", path);
    Ok(value)
}

/// Load a configuration value, falling back to `T::default()` if the file is
/// missing or unreadable
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }
    match load_json(path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring invalid configuration {:?}: {}", path, e);
            T::default()
        }
    }
}

/// Save a configuration value as pretty JSON, creating parent directories
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::IconConfig;
    use crate::CoreError;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("icon.json");
        let config = IconConfig {
            size: 120.0,
            animated: true,
        };

        save_json(&config, &path).unwrap();
        let loaded: IconConfig = load_json(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: IconConfig = load_json_or_default(&dir.path().join("absent.json"));
        assert_eq!(loaded, IconConfig::default());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ size: ").unwrap();

        let err = load_json::<IconConfig>(&path).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
        let fallback: IconConfig = load_json_or_default(&path);
        assert_eq!(fallback, IconConfig::default());
    }
}
