// SPDX-License-Identifier: MPL-2.0
//! In-memory catalogue implementing the [`CatalogueService`] port trait.
//!
//! Applies the same filter rules as the remote service: genre is a
//! case-insensitive substring match, search is a case-insensitive substring
//! match against title or description, featured is the five highest rated.
//!
//! [`CatalogueService`]: crate::application::port::CatalogueService

use crate::application::port::CatalogueService;
use crate::domain::catalogue::{CataloguePage, CatalogueQuery, Movie, MovieId};
use crate::domain::error::CatalogueError;
use async_trait::async_trait;

/// Number of movies in the featured subset.
pub const FEATURED_LIMIT: usize = 5;

/// A fixed movie list served without any I/O.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    movies: Vec<Movie>,
}

impl InMemoryCatalogue {
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// The six-title demo catalogue.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_movies())
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies matching every constraint in `query`, in catalogue order.
    #[must_use]
    pub fn matching(&self, query: &CatalogueQuery) -> Vec<Movie> {
        let genre = query.genre().map(str::to_lowercase);
        let search = query.search().map(str::to_lowercase);

        self.movies
            .iter()
            .filter(|movie| {
                genre
                    .as_deref()
                    .is_none_or(|g| movie.genre.to_lowercase().contains(g))
            })
            .filter(|movie| {
                search.as_deref().is_none_or(|s| {
                    movie.title.to_lowercase().contains(s)
                        || movie.description.to_lowercase().contains(s)
                })
            })
            .cloned()
            .collect()
    }

    /// The highest rated movies, best first.
    #[must_use]
    pub fn top_rated(&self) -> Vec<Movie> {
        let mut ranked = self.movies.clone();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(FEATURED_LIMIT);
        ranked
    }

    /// Distinct genres in first-seen order.
    #[must_use]
    pub fn distinct_genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for movie in &self.movies {
            if !movie.genre.is_empty() && !genres.contains(&movie.genre) {
                genres.push(movie.genre.clone());
            }
        }
        genres
    }
}

#[async_trait]
impl CatalogueService for InMemoryCatalogue {
    async fn catalogue(&self, query: &CatalogueQuery) -> Result<CataloguePage, CatalogueError> {
        let movies = self.matching(query);
        let total = movies.len() as u64;
        Ok(CataloguePage {
            movies,
            total: Some(total),
        })
    }

    async fn featured(&self) -> Result<Vec<Movie>, CatalogueError> {
        Ok(self.top_rated())
    }

    async fn genres(&self) -> Result<Vec<String>, CatalogueError> {
        Ok(self.distinct_genres())
    }

    async fn movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogueError> {
        Ok(self.movies.iter().find(|movie| &movie.id == id).cloned())
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    description: &str,
    genre: &str,
    year: u16,
    duration_minutes: u32,
    rating: f32,
    poster: &str,
    clip: &str,
) -> Movie {
    Movie {
        id: MovieId::new(id),
        title: title.to_string(),
        year,
        genre: genre.to_string(),
        rating,
        description: description.to_string(),
        poster_url: format!("https://images.unsplash.com/{poster}?w=400&h=600&fit=crop"),
        media_url: format!("https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_{clip}.mp4"),
        trailer_url: Some(format!(
            "https://sample-videos.com/zip/10/mp4/SampleVideo_640x360_{clip}.mp4"
        )),
        duration_minutes,
    }
}

fn sample_movies() -> Vec<Movie> {
    vec![
        movie(
            "the-matrix",
            "The Matrix",
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "Action",
            1999,
            136,
            8.7,
            "photo-1489599349251-79194a773e63",
            "1mb",
        ),
        movie(
            "inception",
            "Inception",
            "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "Sci-Fi",
            2010,
            148,
            8.8,
            "photo-1535016120720-40c646be5580",
            "2mb",
        ),
        movie(
            "pulp-fiction",
            "Pulp Fiction",
            "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
            "Crime",
            1994,
            154,
            8.9,
            "photo-1489599349251-79194a773e63",
            "5mb",
        ),
        movie(
            "the-dark-knight",
            "The Dark Knight",
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests.",
            "Action",
            2008,
            152,
            9.0,
            "photo-1440404653325-ab127d49abc1",
            "1mb",
        ),
        movie(
            "forrest-gump",
            "Forrest Gump",
            "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man.",
            "Drama",
            1994,
            142,
            8.8,
            "photo-1489599349251-79194a773e63",
            "2mb",
        ),
        movie(
            "interstellar",
            "Interstellar",
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "Sci-Fi",
            2014,
            169,
            8.6,
            "photo-1535016120720-40c646be5580",
            "5mb",
        ),
    ]
}
