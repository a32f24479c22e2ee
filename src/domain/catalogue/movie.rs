// SPDX-License-Identifier: MPL-2.0
//! Movie records as served by the catalogue.

use std::fmt;

/// Poster shown when a movie has no poster image.
pub const POSTER_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400x600/1a1a1a/white?text=No+Image";

/// Stable, unique movie identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

impl MovieId {
    /// Creates an identifier from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An immutable catalogue entry.
///
/// Within one result set the identifier determines every other field, so
/// equality on [`Movie::id`] is enough to tell two records apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub genre: String,
    /// Display-only rating (e.g. 8.7).
    pub rating: f32,
    pub description: String,
    pub poster_url: String,
    /// Source handed to the media element when the movie is played.
    pub media_url: String,
    pub trailer_url: Option<String>,
    pub duration_minutes: u32,
}

impl Movie {
    /// Runtime label shown on cards and in the player header, e.g. `"136 min"`.
    #[must_use]
    pub fn runtime_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }

    /// One-line summary for the player header: `"1999 • Action • 136 min"`.
    #[must_use]
    pub fn info_line(&self) -> String {
        format!("{} • {} • {}", self.year, self.genre, self.runtime_label())
    }

    /// Poster URL, or the placeholder image when the record has none.
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        if self.poster_url.trim().is_empty() {
            POSTER_PLACEHOLDER_URL
        } else {
            &self.poster_url
        }
    }

    /// Nominal duration in seconds, derived from the catalogue's minutes.
    #[must_use]
    pub fn nominal_duration_secs(&self) -> f64 {
        f64::from(self.duration_minutes) * 60.0
    }
}

#[cfg(test)]
pub(crate) fn sample_movie(id: &str, title: &str, genre: &str) -> Movie {
    Movie {
        id: MovieId::new(id),
        title: title.to_string(),
        year: 1999,
        genre: genre.to_string(),
        rating: 8.0,
        description: format!("{title} description"),
        poster_url: format!("https://posters.test/{id}.jpg"),
        media_url: format!("https://media.test/{id}.mp4"),
        trailer_url: None,
        duration_minutes: 120,
    }
}
