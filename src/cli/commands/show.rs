//! Show command implementation.

use super::load_catalog;
use crate::core::engine;
use crate::core::loader::DataSource;
use crate::models::movie::{Movie, MovieId};
use crate::Error;
use anyhow::Result;
use colored::Colorize;

/// Show details of a movie along with related titles.
pub async fn show_movie(
    source: &DataSource,
    id: &str,
    related_limit: usize,
    format: &str,
) -> Result<()> {
    let collection = load_catalog(source).await?;
    let movie_id = MovieId::new(id.trim());

    let movie = collection
        .get(&movie_id)
        .ok_or_else(|| Error::MovieNotFound(movie_id.to_string()))?;
    let related = engine::related_movies(&collection, &movie_id, related_limit);

    if format == "json" {
        #[derive(serde::Serialize)]
        struct DetailJson<'a> {
            movie: &'a Movie,
            related: &'a [&'a Movie],
        }

        let output = DetailJson {
            movie,
            related: &related,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_detail(movie);
    print_related(&related);

    Ok(())
}

fn print_detail(movie: &Movie) {
    println!("{} {}", "🎬".bold(), movie.title.bold().cyan());
    println!(
        "{} · {:.1} · {} ({})",
        movie.year,
        movie.rating,
        movie.category,
        movie.category.page_link()
    );
    println!();

    let rows = [
        ("Director", movie.director.clone()),
        ("Cast", movie.cast_display()),
        ("Genres", movie.genres_display()),
        ("Duration", movie.duration.clone()),
        ("Release date", movie.release_date.clone()),
        ("Country", movie.country.clone()),
        ("Poster", movie.poster.clone()),
    ];
    for (label, value) in rows.iter().filter(|(_, v)| !v.is_empty()) {
        println!("{:<14} {}", format!("{}:", label).bold(), value);
    }

    if !movie.description.is_empty() {
        println!();
        println!("{}", movie.description);
    }
    if !movie.plot.is_empty() {
        println!();
        println!("{}", "Plot".bold());
        println!("{}", movie.plot);
    }
    println!();
}

fn print_related(related: &[&Movie]) {
    if related.is_empty() {
        return;
    }

    println!("{}", "Related movies:".bold());
    for movie in related {
        println!(
            "  [{}] {} ({}) - {:.1}",
            movie.id,
            movie.title,
            movie.year,
            movie.rating
        );
    }
}
