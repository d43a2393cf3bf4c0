//! Movie data models.

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Stable movie identifier, shared by every page of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Movie category.
///
/// Held in canonical form; the routing key and the localized display label
/// are both derived from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Category {
    Action,
    Drama,
    Comedy,
    SciFi,
    Animation,
    Romance,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Action,
        Category::Drama,
        Category::Comedy,
        Category::SciFi,
        Category::Animation,
        Category::Romance,
    ];

    /// Routing key used in page names and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Drama => "drama",
            Category::Comedy => "comedy",
            Category::SciFi => "sci-fi",
            Category::Animation => "animation",
            Category::Romance => "romance",
        }
    }

    /// Display label stored in the movie data.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Action => "动作片",
            Category::Drama => "剧情片",
            Category::Comedy => "喜剧片",
            Category::SciFi => "科幻片",
            Category::Animation => "动画片",
            Category::Romance => "爱情片",
        }
    }

    /// Listing page for this category.
    pub fn page_link(&self) -> String {
        format!("{}.html", self.key())
    }

    /// Look up a category by routing key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Look up a category by display label.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Category::from_label(trimmed)
            .or_else(|| Category::from_key(trimmed))
            .ok_or_else(|| format!("unknown category '{}'", value))
    }
}

/// A movie record. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Identifier, taken from the key of the movie map. An `id` inside the
    /// record itself is ignored.
    #[serde(default, skip_deserializing)]
    pub id: MovieId,
    /// Title.
    pub title: String,
    /// Director(s), free text.
    #[serde(default)]
    pub director: String,
    /// Cast members.
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub cast: Vec<String>,
    /// Genres.
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub genres: Vec<String>,
    /// Short description shown on cards.
    #[serde(default)]
    pub description: String,
    /// Full plot shown on the detail page.
    #[serde(default)]
    pub plot: String,
    pub category: Category,
    pub year: u16,
    /// Rating (0-10).
    pub rating: f32,
    #[serde(default)]
    pub country: String,
    /// Running time as displayed (e.g. "180分钟").
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub release_date: String,
    /// Poster image file name.
    #[serde(default)]
    pub poster: String,
}

impl Movie {
    /// Cast joined for display.
    pub fn cast_display(&self) -> String {
        self.cast.join(", ")
    }

    /// Genres joined for display.
    pub fn genres_display(&self) -> String {
        self.genres.join(", ")
    }
}

/// Accept a free-text field given either as one string or a list of strings.
fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<RawList>::deserialize(deserializer)? {
        Some(RawList::One(s)) if s.is_empty() => Vec::new(),
        Some(RawList::One(s)) => vec![s],
        Some(RawList::Many(list)) => list,
        None => Vec::new(),
    })
}
