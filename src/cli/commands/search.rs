//! Search command implementation.

use super::load_catalog;
use crate::core::engine;
use crate::core::loader::DataSource;
use crate::models::movie::Movie;
use crate::utils::text::truncate_title;
use crate::Error;
use anyhow::Result;
use colored::Colorize;

/// A movie with its relevance score, when the search is ranked.
struct Hit<'a> {
    movie: &'a Movie,
    score: Option<u32>,
}

/// Execute search command.
pub async fn execute_search(
    source: &DataSource,
    term: &str,
    category: Option<&str>,
    limit: Option<usize>,
    format: &str,
) -> Result<()> {
    let collection = load_catalog(source).await?;

    let outcome = match category {
        Some(key) => engine::search_in_category(&collection, key, term).map(|movies| {
            movies
                .into_iter()
                .map(|movie| Hit { movie, score: None })
                .collect::<Vec<_>>()
        }),
        None => engine::search(&collection, term).map(|results| {
            results
                .iter()
                .filter_map(|r| {
                    collection.get(&r.movie_id).map(|movie| Hit {
                        movie,
                        score: Some(r.score),
                    })
                })
                .collect::<Vec<_>>()
        }),
    };

    let mut hits = match outcome {
        Ok(hits) => hits,
        Err(Error::EmptyQuery) => {
            println!("{}", "Please enter a search term.".yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    match format {
        "json" => print_json(&hits)?,
        "simple" => print_simple(&hits),
        _ => print_table(&hits, term.trim()),
    }

    Ok(())
}

/// Print results as JSON.
fn print_json(hits: &[Hit<'_>]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct HitJson<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<u32>,
        #[serde(flatten)]
        movie: &'a Movie,
    }

    let output: Vec<HitJson<'_>> = hits
        .iter()
        .map(|h| HitJson {
            score: h.score,
            movie: h.movie,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results in simple format.
fn print_simple(hits: &[Hit<'_>]) {
    if hits.is_empty() {
        println!("No results found.");
        return;
    }

    for hit in hits {
        println!(
            "[{}] {} ({}) - {}",
            hit.movie.id,
            hit.movie.title,
            hit.movie.year,
            hit.movie.category
        );
    }
}

/// Print results as table.
fn print_table(hits: &[Hit<'_>], term: &str) {
    if hits.is_empty() {
        println!(
            "{}",
            format!("No movies found matching \"{}\".", term).yellow()
        );
        return;
    }

    println!(
        "{}",
        format!("Found {} movies:", hits.len()).bold().cyan()
    );
    println!();
    println!(
        " {:>4} | {:>5} | {:<40} | {:>4} | {:>6} | {}",
        "ID", "Score", "Title", "Year", "Rating", "Category"
    );
    println!("{}", "-".repeat(80));

    for hit in hits {
        println!(
            " {:>4} | {:>5} | {:<40} | {:>4} | {:>6.1} | {}",
            hit.movie.id,
            hit.score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            truncate_title(&hit.movie.title, 38),
            hit.movie.year,
            hit.movie.rating,
            hit.movie.category
        );
    }
    println!();
}
