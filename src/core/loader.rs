//! Movie data loading.
//!
//! The collection is read once, from a local file or an HTTP URL, before any
//! query runs.

use crate::models::catalog::{LoadStatus, LoadedCatalog, MovieCollection};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where the movie data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load and decode the movie collection.
pub async fn load_collection(source: &DataSource) -> Result<MovieCollection> {
    let started = Instant::now();

    let content = match source {
        DataSource::File(path) => read_file(path).await?,
        DataSource::Url(url) => fetch_url(url).await?,
    };

    let collection = parse_collection(&content)?;

    tracing::info!(
        "Loaded {} movies from {} in {:?}",
        collection.len(),
        source,
        started.elapsed()
    );

    Ok(collection)
}

/// Load the collection, degrading to an empty one on failure.
///
/// The returned status lets callers tell "no data" apart from "no matches".
pub async fn load_or_empty(source: &DataSource) -> LoadedCatalog {
    match load_collection(source).await {
        Ok(collection) => LoadedCatalog {
            collection,
            status: LoadStatus::Loaded,
        },
        Err(e) => {
            tracing::warn!("Failed to load movie data from {}: {}", source, e);
            LoadedCatalog {
                collection: MovieCollection::empty(),
                status: LoadStatus::Failed(e.to_string()),
            }
        }
    }
}

/// Decode the JSON document into a collection.
pub fn parse_collection(content: &str) -> Result<MovieCollection> {
    MovieCollection::from_json_str(content).map_err(|e| Error::InvalidData(e.to_string()))
}

async fn read_file(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::DataSourceNotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

async fn fetch_url(url: &str) -> Result<String> {
    tracing::debug!("Fetching movie data: {}", url);

    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::DataSourceNotFound(format!("{} (HTTP {})", url, status)));
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_source() {
        assert_eq!(
            DataSource::parse("https://example.com/data/movies.json"),
            DataSource::Url("https://example.com/data/movies.json".to_string())
        );
        assert_eq!(
            DataSource::parse("data/movies.json"),
            DataSource::File(PathBuf::from("data/movies.json"))
        );
        assert_eq!(
            DataSource::parse(" ./data/movies.json "),
            DataSource::File(PathBuf::from("./data/movies.json"))
        );
    }

    #[test]
    fn test_parse_collection_invalid() {
        let err = parse_collection("{ \"movies\": [] }").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
