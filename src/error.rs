//! Error types for the catalog.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the catalog.
#[derive(Error, Debug)]
pub enum Error {
    // Query errors
    #[error("Please enter a search term")]
    EmptyQuery,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    // Data source errors
    #[error("Movie data not found: {0}")]
    DataSourceNotFound(String),

    #[error("Invalid movie data: {0}")]
    InvalidData(String),

    // Config errors
    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether this is the "no query" condition rather than a real failure.
    pub fn is_empty_query(&self) -> bool {
        matches!(self, Error::EmptyQuery)
    }
}
