//! Browse command implementation.

use super::load_catalog;
use crate::core::engine;
use crate::core::loader::DataSource;
use crate::models::movie::{Category, Movie};
use crate::models::query::{BrowseState, FilterMode, FilterPolicy, Page};
use crate::utils::text::truncate_title;
use anyhow::{bail, Result};
use colored::Colorize;

/// Execute browse command.
pub async fn execute_browse(
    source: &DataSource,
    category: &str,
    filter: &str,
    page: usize,
    policy: &FilterPolicy,
    format: &str,
) -> Result<()> {
    if page < 1 {
        bail!("Page numbers start at 1");
    }
    if policy.page_size < 1 {
        bail!("Page size must be at least 1");
    }
    if Category::from_key(category).is_none() {
        tracing::warn!(
            "Unknown category '{}'. Known categories: {}",
            category,
            Category::ALL.map(|c| c.key()).join(", ")
        );
    }

    let collection = load_catalog(source).await?;

    let state = BrowseState::new(category)
        .with_filter(FilterMode::parse(filter))
        .at_page(page);
    let listing = engine::browse(&collection, &state, policy);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&listing)?),
        "simple" => print_simple(&listing),
        _ => print_table(&state, &listing),
    }

    Ok(())
}

/// Print one page in simple format.
fn print_simple(listing: &Page<&Movie>) {
    for movie in &listing.items {
        println!(
            "[{}] {} ({}) - {:.1}",
            movie.id,
            movie.title,
            movie.year,
            movie.rating
        );
    }
    println!("Page {}/{}", listing.page, listing.total_pages);
}

/// Print one page as a table with navigation hints.
fn print_table(state: &BrowseState, listing: &Page<&Movie>) {
    let heading = Category::from_key(&state.category)
        .map(|c| format!("{} ({})", c.label(), c.key()))
        .unwrap_or_else(|| state.category.clone());

    println!(
        "{} {} {}",
        "🎬".bold(),
        heading.bold().cyan(),
        format!("[{}]", state.filter).dimmed()
    );
    println!();

    if listing.items.is_empty() {
        if listing.total_items == 0 {
            println!("{}", "No movies in this category.".yellow());
        } else {
            println!(
                "{}",
                format!(
                    "Page {} is empty; this listing has {} pages.",
                    listing.page, listing.total_pages
                )
                .yellow()
            );
        }
        return;
    }

    println!(
        " {:>4} | {:<40} | {:>4} | {:>6} | {}",
        "ID", "Title", "Year", "Rating", "Description"
    );
    println!("{}", "-".repeat(80));

    for movie in &listing.items {
        println!(
            " {:>4} | {:<40} | {:>4} | {:>6.1} | {}",
            movie.id,
            truncate_title(&movie.title, 38),
            movie.year,
            movie.rating,
            truncate_title(&movie.description, 30)
        );
    }
    println!();

    let previous = if listing.has_previous {
        "◀ prev".green().to_string()
    } else {
        "◀ prev".dimmed().to_string()
    };
    let next = if listing.has_next {
        "next ▶".green().to_string()
    } else {
        "next ▶".dimmed().to_string()
    };
    println!(
        "{}  Page {}/{} ({} movies)  {}",
        previous, listing.page, listing.total_pages, listing.total_items, next
    );
}
