// SPDX-License-Identifier: MPL-2.0
//! Catalogue pages and the displayed catalogue result.

use super::movie::{Movie, MovieId};

/// One page of movies as returned by the catalogue service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CataloguePage {
    pub movies: Vec<Movie>,
    /// Total matches reported by the service, when it reports one.
    pub total: Option<u64>,
}

impl CataloguePage {
    #[must_use]
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            total: None,
        }
    }
}

/// The currently displayed set of movies.
///
/// A result is only ever replaced as a whole. It exposes no in-place
/// mutation of its movie list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogueResult {
    movies: Vec<Movie>,
    total: Option<u64>,
}

impl CatalogueResult {
    /// An empty result (nothing loaded, or nothing matched).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// Total matches reported by the service, falling back to [`count`](Self::count).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.movies.len() as u64)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Looks a movie up by identifier.
    #[must_use]
    pub fn find(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }

    /// Label for the filter bar, e.g. `"6 movies found"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.count() {
            1 => "1 movie found".to_string(),
            n => format!("{n} movies found"),
        }
    }
}

impl From<CataloguePage> for CatalogueResult {
    fn from(page: CataloguePage) -> Self {
        Self {
            movies: page.movies,
            total: page.total,
        }
    }
}
