//! Categories command implementation.

use crate::core::engine;
use crate::core::loader::{self, DataSource};
use crate::models::movie::Category;
use anyhow::{bail, Result};
use colored::Colorize;

/// List every category with its movie count.
pub async fn list_categories(source: &DataSource) -> Result<()> {
    let catalog = loader::load_or_empty(source).await;

    println!("{}", "📁 Categories".bold().cyan());
    println!();
    println!("{:<12} {:<10} {}", "Key".bold(), "Label".bold(), "Movies".bold());
    println!("{}", "-".repeat(40));

    for category in Category::ALL {
        let count = engine::list_by_category(&catalog.collection, category.key()).len();
        println!("{:<12} {:<10} {}", category.key(), category.label(), count);
    }
    println!();

    if !catalog.is_loaded() {
        bail!("Movie data unavailable from {}", source);
    }

    println!("Total: {} movies", catalog.collection.len());
    Ok(())
}
