use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub notes_dir: PathBuf,
}

impl Config {
    /// Loads from the default location; `Ok(None)` when no config file
    /// exists yet.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Tilde and environment variables are resolved on load, so the
        // rest of the app only ever sees concrete paths.
        config.notes_dir = expand_path(&config.notes_dir).unwrap_or(config.notes_dir);

        Ok(Some(config))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// Where notes land when no config file says otherwise.
pub fn default_notes_dir() -> PathBuf {
    let dir = shellexpand::tilde("~/.local/share/blockdown/notes");
    PathBuf::from(dir.as_ref())
}

fn expand_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_expands_tilde() {
        let path = Config::config_path();
        let raw = path.to_string_lossy();

        assert!(!raw.starts_with('~'));
        assert!(raw.ends_with(".config/blockdown/config.toml"));
    }

    #[test]
    fn test_default_notes_dir_expands_tilde() {
        let raw = default_notes_dir().to_string_lossy().to_string();

        assert!(!raw.starts_with('~'));
        assert!(raw.ends_with(".local/share/blockdown/notes"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let config = Config {
            notes_dir: PathBuf::from("/tmp/blockdown-notes"),
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&missing).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_tilde_in_notes_dir_expands_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "notes_dir = \"~/notes\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(!loaded.notes_dir.to_string_lossy().starts_with('~'));
        assert!(loaded.notes_dir.to_string_lossy().ends_with("notes"));
    }

    #[test]
    fn test_env_var_in_notes_dir_expands_on_load() {
        unsafe {
            env::set_var("BLOCKDOWN_TEST_ROOT", "/custom/root");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "notes_dir = \"$BLOCKDOWN_TEST_ROOT/notes\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.notes_dir, PathBuf::from("/custom/root/notes"));

        unsafe {
            env::remove_var("BLOCKDOWN_TEST_ROOT");
        }
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "notes_dir = [broken").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
