//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod search;
pub mod show;

use crate::core::loader::{self, DataSource};
use crate::models::catalog::MovieCollection;
use anyhow::{Context, Result};

/// Load the collection for a command, failing with the data source named.
pub(crate) async fn load_catalog(source: &DataSource) -> Result<MovieCollection> {
    loader::load_collection(source)
        .await
        .with_context(|| format!("Failed to load movie data from {}", source))
}
