//! Configuration model.

use super::query::FilterPolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the default data source.
pub const DATA_SOURCE_ENV: &str = "CINESPACE_DATA";

/// Default location of the static movie data.
pub const DEFAULT_DATA_SOURCE: &str = "data/movies.json";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path or URL of the movie data file.
    pub data_source: String,
    /// Listing thresholds and page size.
    pub browse: FilterPolicy,
    /// Number of related movies shown on a detail page.
    pub related_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: std::env::var(DATA_SOURCE_ENV)
                .unwrap_or_else(|_| DEFAULT_DATA_SOURCE.to_string()),
            browse: FilterPolicy::default(),
            related_limit: 4,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinespace")
}

/// Path of the user configuration file.
pub fn config_file_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    if config.browse.page_size == 0 {
        return Err(Error::InvalidConfig(format!(
            "{}: browse.page_size must be at least 1",
            path.display()
        )));
    }
    Ok(config)
}

/// Load configuration from the user config file, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = config_file_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring config file {}: {}", config_path.display(), e),
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "related_limit = 8").unwrap();
        writeln!(file, "[browse]").unwrap();
        writeln!(file, "recent_year = 2024").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.related_limit, 8);
        assert_eq!(config.browse.recent_year, 2024);
        assert_eq!(config.browse.page_size, 6);
        assert_eq!(config.browse.popular_rating, 8.5);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[browse]").unwrap();
        writeln!(file, "page_size = 0").unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "related_limit = \"many\"").unwrap();

        assert!(matches!(
            load_config_from(file.path()).unwrap_err(),
            Error::Toml(_)
        ));
    }

    #[test]
    fn test_data_source_set_explicitly() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_source = \"https://example.com/data/movies.json\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.data_source, "https://example.com/data/movies.json");
    }
}
