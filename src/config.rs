// Application configuration and default locations

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "termban";

/// Settings read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file to use instead of the default data location
    pub db_path: Option<PathBuf>,
    /// Log level for the CLI (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the database path: explicit override, then config, then the default location
    pub fn resolve_db_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        default_db_path().ok_or_else(|| eyre!("Could not determine a data directory for the task database"))
    }
}

/// Default config file: `<config dir>/termban/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}

/// Default database file: `<data dir>/termban/db/tasks.db`
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("db").join("tasks.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "db_path: /var/lib/termban/tasks.db\nlog_level: debug\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/var/lib/termban/tasks.db")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_partial_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "log_level: info\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.db_path, None);
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "db_path: [unclosed\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_resolve_db_path_precedence() {
        let config = Config {
            db_path: Some(PathBuf::from("/from/config.db")),
            log_level: None,
        };

        let flag = PathBuf::from("/from/flag.db");
        assert_eq!(config.resolve_db_path(Some(&flag)).unwrap(), flag);
        assert_eq!(config.resolve_db_path(None).unwrap(), PathBuf::from("/from/config.db"));
    }

    #[test]
    fn test_default_db_path_layout() {
        if let Some(path) = default_db_path() {
            assert!(path.ends_with("termban/db/tasks.db"));
        }
    }
}
