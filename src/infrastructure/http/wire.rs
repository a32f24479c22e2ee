// SPDX-License-Identifier: MPL-2.0
//! JSON shapes exchanged with the catalogue service.
//!
//! List endpoints are decoded leniently: the body must be JSON, but a
//! missing or mistyped `movies`/`genres` field reads as an empty list, and a
//! malformed movie record is skipped rather than failing the whole response.

use crate::domain::catalogue::{CataloguePage, Movie, MovieId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One movie as the service serializes it.
///
/// Only `id`, `title` and `video_url` are required; everything else falls
/// back to an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: u16,
    /// Runtime in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub poster_url: String,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: MovieId::new(record.id),
            title: record.title,
            year: record.year,
            genre: record.genre,
            rating: record.rating,
            description: record.description,
            poster_url: record.poster_url,
            media_url: record.video_url,
            trailer_url: record.trailer_url.filter(|url| !url.trim().is_empty()),
            duration_minutes: record.duration,
        }
    }
}

impl From<&Movie> for MovieRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.as_str().to_string(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: movie.genre.clone(),
            year: movie.year,
            duration: movie.duration_minutes,
            rating: movie.rating,
            poster_url: movie.poster_url.clone(),
            video_url: movie.media_url.clone(),
            trailer_url: movie.trailer_url.clone(),
        }
    }
}

/// Decodes the `movies` array of a list response.
pub fn movies_from(body: &Value) -> Vec<Movie> {
    let Some(items) = body.get("movies").and_then(Value::as_array) else {
        if body.get("movies").is_some() {
            log::warn!("catalogue response has a non-list 'movies' field, treating as empty");
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            match serde_json::from_value::<MovieRecord>(item.clone()) {
                Ok(record) => Some(Movie::from(record)),
                Err(error) => {
                    log::warn!("skipping malformed movie record {index}: {error}");
                    None
                }
            }
        })
        .collect()
}

/// Decodes a catalogue response, including the optional `total`.
pub fn page_from(body: &Value) -> CataloguePage {
    CataloguePage {
        movies: movies_from(body),
        total: body.get("total").and_then(Value::as_u64),
    }
}

/// Decodes the `genres` array; non-string entries are dropped.
pub fn genres_from(body: &Value) -> Vec<String> {
    body.get("genres")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matrix() -> Value {
        json!({
            "id": "m1",
            "title": "The Matrix",
            "description": "A hacker learns the truth.",
            "genre": "Action",
            "year": 1999,
            "duration": 136,
            "rating": 8.7,
            "poster_url": "https://posters.test/m1.jpg",
            "video_url": "https://media.test/m1.mp4",
            "trailer_url": "https://media.test/m1-trailer.mp4",
            "created_at": "2024-01-01T00:00:00"
        })
    }

    #[test]
    fn full_record_maps_every_field() {
        let movies = movies_from(&json!({ "movies": [matrix()] }));

        assert_eq!(movies.len(), 1);
        let movie = &movies[0];
        assert_eq!(movie.id.as_str(), "m1");
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.duration_minutes, 136);
        assert_eq!(movie.media_url, "https://media.test/m1.mp4");
        assert_eq!(
            movie.trailer_url.as_deref(),
            Some("https://media.test/m1-trailer.mp4")
        );
    }

    #[test]
    fn missing_movies_field_is_empty() {
        assert!(movies_from(&json!({})).is_empty());
        assert!(movies_from(&json!({ "movies": null })).is_empty());
        assert!(movies_from(&json!({ "movies": "oops" })).is_empty());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let body = json!({
            "movies": [
                matrix(),
                { "title": "No id", "video_url": "x" },
                { "id": "m3", "title": "Bad year", "video_url": "x", "year": "soon" },
                42
            ]
        });

        let movies = movies_from(&body);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id.as_str(), "m1");
    }

    #[test]
    fn optional_fields_default() {
        let movies = movies_from(&json!({
            "movies": [{ "id": "m9", "title": "Bare", "video_url": "https://media.test/m9.mp4" }]
        }));

        let movie = &movies[0];
        assert_eq!(movie.genre, "");
        assert_eq!(movie.duration_minutes, 0);
        assert_eq!(movie.trailer_url, None);
        assert_eq!(movie.poster_or_placeholder(), crate::domain::catalogue::POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn page_carries_total_when_reported() {
        let page = page_from(&json!({ "movies": [matrix()], "total": 57 }));
        assert_eq!(page.total, Some(57));

        let page = page_from(&json!({ "movies": [matrix()] }));
        assert_eq!(page.total, None);
    }

    #[test]
    fn genres_keep_strings_only() {
        assert_eq!(
            genres_from(&json!({ "genres": ["Action", 3, null, "Drama"] })),
            vec!["Action".to_string(), "Drama".to_string()]
        );
        assert!(genres_from(&json!({ "genres": {} })).is_empty());
        assert!(genres_from(&json!([])).is_empty());
    }

    #[test]
    fn record_round_trips_through_domain() {
        let record: MovieRecord = serde_json::from_value(matrix()).expect("valid record");
        let movie = Movie::from(record.clone());
        assert_eq!(MovieRecord::from(&movie), record);
    }
}
