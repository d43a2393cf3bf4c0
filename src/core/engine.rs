//! Catalog query engine - ranked search, category listing, filtering and paging.
//!
//! Every function here is a pure computation over an already-loaded
//! [`MovieCollection`]. An empty collection is valid input and simply yields
//! empty results.

use crate::models::catalog::MovieCollection;
use crate::models::movie::{Category, Movie, MovieId};
use crate::models::query::{BrowseState, FilterMode, FilterPolicy, Page, PageInfo, SearchResult};
use crate::utils::text::{any_contains_ignore_case, contains_ignore_case, normalize};
use crate::{Error, Result};

/// Weight of a title match.
pub const TITLE_WEIGHT: u32 = 100;
/// Weight of a director match.
pub const DIRECTOR_WEIGHT: u32 = 50;
/// Weight of a cast match.
pub const CAST_WEIGHT: u32 = 40;
/// Weight of a genre match.
pub const GENRES_WEIGHT: u32 = 30;
/// Weight of a category match.
pub const CATEGORY_WEIGHT: u32 = 25;
/// Weight of a description match.
pub const DESCRIPTION_WEIGHT: u32 = 20;
/// Weight of a year match.
pub const YEAR_WEIGHT: u32 = 15;
/// Weight of a country match.
pub const COUNTRY_WEIGHT: u32 = 10;

/// Score one movie against a search term.
///
/// Text fields are compared case-insensitively against the trimmed term.
/// The year is compared as decimal text against the trimmed term as typed.
pub fn score_movie(movie: &Movie, term: &str) -> u32 {
    let raw = term.trim();
    let lower = normalize(term);
    if lower.is_empty() {
        return 0;
    }

    let mut score = 0;

    if contains_ignore_case(&movie.title, &lower) {
        score += TITLE_WEIGHT;
    }
    if contains_ignore_case(&movie.director, &lower) {
        score += DIRECTOR_WEIGHT;
    }
    if any_contains_ignore_case(&movie.cast, &lower) {
        score += CAST_WEIGHT;
    }
    if any_contains_ignore_case(&movie.genres, &lower) {
        score += GENRES_WEIGHT;
    }
    if category_matches(movie.category, &lower) {
        score += CATEGORY_WEIGHT;
    }
    if contains_ignore_case(&movie.description, &lower) {
        score += DESCRIPTION_WEIGHT;
    }
    if movie.year.to_string().contains(raw) {
        score += YEAR_WEIGHT;
    }
    if contains_ignore_case(&movie.country, &lower) {
        score += COUNTRY_WEIGHT;
    }

    score
}

/// The category field is the display label stored on the movie.
fn category_matches(category: Category, term_lower: &str) -> bool {
    category.label().to_lowercase().contains(term_lower)
}

/// Ranked free-text search over the whole collection.
///
/// Results are ordered by descending score; equal scores keep collection
/// order. Movies scoring zero are left out. A blank term is reported as
/// [`Error::EmptyQuery`].
pub fn search(collection: &MovieCollection, term: &str) -> Result<Vec<SearchResult>> {
    if term.trim().is_empty() {
        return Err(Error::EmptyQuery);
    }

    let mut results: Vec<SearchResult> = collection
        .iter()
        .filter_map(|movie| {
            let score = score_movie(movie, term);
            (score > 0).then(|| SearchResult {
                movie_id: movie.id.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in collection order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        "Search '{}' matched {} of {} movies",
        term.trim(),
        results.len(),
        collection.len()
    );

    Ok(results)
}

/// All movies of a category, in collection order.
///
/// An unknown category key yields an empty list.
pub fn list_by_category<'a>(collection: &'a MovieCollection, key: &str) -> Vec<&'a Movie> {
    match Category::from_key(key) {
        Some(category) => collection
            .iter()
            .filter(|movie| movie.category == category)
            .collect(),
        None => {
            tracing::debug!("Unknown category key '{}'", key);
            Vec::new()
        }
    }
}

/// Search within one category by title or description.
///
/// This is the lighter search offered on listing pages: unweighted, and
/// returned in collection order.
pub fn search_in_category<'a>(
    collection: &'a MovieCollection,
    key: &str,
    term: &str,
) -> Result<Vec<&'a Movie>> {
    let lower = normalize(term);
    if lower.is_empty() {
        return Err(Error::EmptyQuery);
    }

    Ok(list_by_category(collection, key)
        .into_iter()
        .filter(|movie| {
            contains_ignore_case(&movie.title, &lower)
                || contains_ignore_case(&movie.description, &lower)
        })
        .collect())
}

/// Apply a filter mode using the default thresholds.
pub fn apply_filter(movies: Vec<&Movie>, mode: FilterMode) -> Vec<&Movie> {
    apply_filter_with(movies, mode, &FilterPolicy::default())
}

/// Apply a filter mode.
///
/// `recent` and `popular` keep input order. `rating` keeps every movie and
/// reorders them by descending rating (stable for equal ratings).
pub fn apply_filter_with<'a>(
    mut movies: Vec<&'a Movie>,
    mode: FilterMode,
    policy: &FilterPolicy,
) -> Vec<&'a Movie> {
    match mode {
        FilterMode::All => movies,
        FilterMode::Recent => {
            movies.retain(|movie| movie.year >= policy.recent_year);
            movies
        }
        FilterMode::Popular => {
            movies.retain(|movie| movie.rating >= policy.popular_rating);
            movies
        }
        FilterMode::Rating => {
            movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            movies
        }
    }
}

/// Slice out one 1-based page.
///
/// Pages past the end are empty. Page 0 is a caller error and also yields
/// an empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
    else {
        return Vec::new();
    };

    items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect()
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        count.div_ceil(page_size)
    }
}

/// Previous/next availability for a page.
pub fn page_info(page: usize, total_pages: usize) -> PageInfo {
    PageInfo {
        page,
        total_pages,
        has_previous: total_pages > 0 && page > 1,
        has_next: page < total_pages,
    }
}

/// Produce the listing page described by `state`: category, then filter,
/// then paging. Page counts derive from the filtered list.
pub fn browse<'a>(
    collection: &'a MovieCollection,
    state: &BrowseState,
    policy: &FilterPolicy,
) -> Page<&'a Movie> {
    let movies = list_by_category(collection, &state.category);
    let filtered = apply_filter_with(movies, state.filter, policy);
    let total_items = filtered.len();
    let total_pages = total_pages(total_items, policy.page_size);
    let items = paginate(&filtered, state.page, policy.page_size);
    let info = page_info(state.page, total_pages);

    tracing::debug!(
        "Browse {} [{}] page {}/{}: {} of {} movies",
        state.category,
        state.filter,
        state.page,
        total_pages,
        items.len(),
        total_items
    );

    Page {
        items,
        page: state.page,
        page_size: policy.page_size,
        total_items,
        total_pages,
        has_previous: info.has_previous,
        has_next: info.has_next,
    }
}

/// Other movies in the same category, in collection order.
///
/// Unknown ids yield an empty list.
pub fn related_movies<'a>(
    collection: &'a MovieCollection,
    id: &MovieId,
    limit: usize,
) -> Vec<&'a Movie> {
    let Some(current) = collection.get(id) else {
        return Vec::new();
    };

    collection
        .iter()
        .filter(|movie| movie.category == current.category)
        .filter(|movie| &movie.id != id)
        .take(limit)
        .collect()
}
