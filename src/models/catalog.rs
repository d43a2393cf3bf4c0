//! The loaded movie collection.

use super::movie::{Movie, MovieId};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// All movies of the site, in the order of the source document.
///
/// Read-only after load. Lookups by id go through a position index so
/// iteration order never depends on hashing.
#[derive(Debug, Clone, Default)]
pub struct MovieCollection {
    movies: Vec<Movie>,
    positions: HashMap<MovieId, usize>,
}

impl MovieCollection {
    /// An empty collection (valid input for every query).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection from `(id, movie)` pairs in source order.
    ///
    /// The id overrides whatever id the record carries. A repeated id keeps
    /// the position of its first occurrence and the record of its last.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MovieId, Movie)>,
    {
        let mut collection = Self::default();
        for (id, mut movie) in entries {
            movie.id = id.clone();
            match collection.positions.get(&id) {
                Some(&pos) => collection.movies[pos] = movie,
                None => {
                    collection.positions.insert(id, collection.movies.len());
                    collection.movies.push(movie);
                }
            }
        }
        collection
    }

    /// Parse the site's JSON document: `{ "movies": { "<id>": { ... } } }`.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        Ok(document.movies)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id.
    pub fn get(&self, id: &MovieId) -> Option<&Movie> {
        self.positions.get(id).map(|&pos| &self.movies[pos])
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl<'de> Deserialize<'de> for MovieCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = MovieCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from movie id to movie record")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // A record that does not decode is dropped; the rest still load
                while let Some((id, value)) = access.next_entry::<MovieId, serde_json::Value>()? {
                    match serde_json::from_value::<Movie>(value) {
                        Ok(movie) => entries.push((id, movie)),
                        Err(e) => tracing::warn!("Skipping movie {}: {}", id, e),
                    }
                }
                Ok(MovieCollection::from_entries(entries))
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Top-level layout of the static data file.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    movies: MovieCollection,
}

/// Outcome of the one-time data load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Failed(String),
}

/// A collection together with how it was obtained.
///
/// An empty collection with `LoadStatus::Loaded` means "no data"; with
/// `LoadStatus::Failed` it means the source could not be read.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub collection: MovieCollection,
    pub status: LoadStatus,
}

impl LoadedCatalog {
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}
