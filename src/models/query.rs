//! Query models: search results, filter modes and browsing state.

use super::movie::MovieId;
use serde::{Deserialize, Serialize};

/// Year from which a movie counts as recent.
pub const RECENT_YEAR: u16 = 2023;

/// Rating from which a movie counts as popular.
pub const POPULAR_RATING: f32 = 8.5;

/// Movies shown per listing page.
pub const PAGE_SIZE: usize = 6;

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub movie_id: MovieId,
    /// Sum of the weights of every matching field. Always positive.
    pub score: u32,
}

/// Named subset/order of a category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    /// Released in or after [`FilterPolicy::recent_year`].
    Recent,
    /// Rated at least [`FilterPolicy::popular_rating`].
    Popular,
    /// Every movie, highest rating first.
    Rating,
}

impl FilterMode {
    /// Parse a filter name. Unknown names fall back to `All`.
    pub fn parse(name: &str) -> FilterMode {
        match name.trim().to_lowercase().as_str() {
            "all" => FilterMode::All,
            "recent" => FilterMode::Recent,
            "popular" => FilterMode::Popular,
            "rating" => FilterMode::Rating,
            other => {
                tracing::warn!("Unknown filter mode '{}', showing all movies", other);
                FilterMode::All
            }
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Recent => write!(f, "recent"),
            FilterMode::Popular => write!(f, "popular"),
            FilterMode::Rating => write!(f, "rating"),
        }
    }
}

/// Fixed thresholds for filtering and paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    /// Movies per page.
    pub page_size: usize,
    /// Minimum year for `recent`.
    pub recent_year: u16,
    /// Minimum rating for `popular`.
    pub popular_rating: f32,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            recent_year: RECENT_YEAR,
            popular_rating: POPULAR_RATING,
        }
    }
}

/// Where a visitor is while browsing a category.
///
/// Every transition returns a new state; nothing is kept between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    /// Category routing key, as received from the caller.
    pub category: String,
    pub filter: FilterMode,
    /// 1-based page number.
    pub page: usize,
}

impl BrowseState {
    /// First page of a category, unfiltered.
    pub fn new<S: Into<String>>(category: S) -> Self {
        Self {
            category: category.into(),
            filter: FilterMode::All,
            page: 1,
        }
    }

    /// Jump to a page.
    pub fn at_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Switch filter mode; always returns to the first page.
    pub fn with_filter(self, filter: FilterMode) -> Self {
        Self {
            filter,
            page: 1,
            ..self
        }
    }

    /// Advance one page unless already on the last one.
    pub fn next_page(self, total_pages: usize) -> Self {
        if self.page < total_pages {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Go back one page unless already on the first one.
    pub fn previous_page(self) -> Self {
        if self.page > 1 {
            Self {
                page: self.page - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Back to the first page with no filter.
    pub fn reset(self) -> Self {
        Self::new(self.category)
    }
}

/// Navigation state of a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Number of items after filtering, across all pages.
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_parse() {
        assert_eq!(FilterMode::parse("recent"), FilterMode::Recent);
        assert_eq!(FilterMode::parse(" Popular "), FilterMode::Popular);
        assert_eq!(FilterMode::parse("rating"), FilterMode::Rating);
        assert_eq!(FilterMode::parse("newest"), FilterMode::All);
        assert_eq!(FilterMode::parse(""), FilterMode::All);
    }

    #[test]
    fn test_default_policy() {
        let policy = FilterPolicy::default();
        assert_eq!(policy.page_size, 6);
        assert_eq!(policy.recent_year, 2023);
        assert_eq!(policy.popular_rating, 8.5);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let state = BrowseState::new("action").at_page(3);
        let state = state.with_filter(FilterMode::Popular);
        assert_eq!(state.page, 1);
        assert_eq!(state.filter, FilterMode::Popular);
        assert_eq!(state.category, "action");
    }

    #[test]
    fn test_page_navigation_bounds() {
        let state = BrowseState::new("action");
        let state = state.previous_page();
        assert_eq!(state.page, 1);

        let state = state.next_page(3).next_page(3);
        assert_eq!(state.page, 3);
        let state = state.next_page(3);
        assert_eq!(state.page, 3);

        let state = state.previous_page();
        assert_eq!(state.page, 2);

        // No pages at all: next stays put.
        assert_eq!(BrowseState::new("horror").next_page(0).page, 1);
    }

    #[test]
    fn test_reset() {
        let state = BrowseState::new("drama")
            .with_filter(FilterMode::Rating)
            .at_page(2)
            .reset();
        assert_eq!(state, BrowseState::new("drama"));
    }
}
