// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use cine_lens::app::{MediaFactory, Message, MessageSender};
use cine_lens::application::playback::SessionId;
use cine_lens::application::port::{CatalogueService, MediaElement};
use cine_lens::domain::catalogue::{CataloguePage, CatalogueQuery, Movie, MovieId};
use cine_lens::domain::error::CatalogueError;
use cine_lens::infrastructure::{CommandLog, EventSink, HeadlessMediaElement, InMemoryCatalogue};
use std::time::Duration;

/// Sample catalogue whose answers arrive after configurable delays and can
/// be made to fail.
#[derive(Debug, Default)]
pub struct ScriptedCatalogue {
    inner: InMemoryCatalogue,
    base_delay: Duration,
    genre_delays: Vec<(String, Duration)>,
    fail_catalogue_for: Vec<String>,
    fail_featured: bool,
}

impl ScriptedCatalogue {
    pub fn sample() -> Self {
        Self {
            inner: InMemoryCatalogue::sample(),
            ..Self::default()
        }
    }

    /// Delay applied to every call without a more specific one.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Delay applied to catalogue calls constrained to `genre`.
    pub fn with_genre_delay(mut self, genre: &str, delay: Duration) -> Self {
        self.genre_delays.push((genre.to_string(), delay));
        self
    }

    /// Catalogue calls constrained to `genre` answer with HTTP 500.
    pub fn failing_genre(mut self, genre: &str) -> Self {
        self.fail_catalogue_for.push(genre.to_string());
        self
    }

    pub fn failing_featured(mut self) -> Self {
        self.fail_featured = true;
        self
    }

    fn delay_for(&self, query: &CatalogueQuery) -> Duration {
        query
            .genre()
            .and_then(|genre| {
                self.genre_delays
                    .iter()
                    .find(|(g, _)| g == genre)
                    .map(|(_, delay)| *delay)
            })
            .unwrap_or(self.base_delay)
    }
}

pub fn server_error(path: &str) -> CatalogueError {
    CatalogueError::Status {
        status: 500,
        url: format!("http://catalogue.test/api/{path}"),
    }
}

#[async_trait]
impl CatalogueService for ScriptedCatalogue {
    async fn catalogue(&self, query: &CatalogueQuery) -> Result<CataloguePage, CatalogueError> {
        tokio::time::sleep(self.delay_for(query)).await;
        if query
            .genre()
            .is_some_and(|genre| self.fail_catalogue_for.iter().any(|g| g == genre))
        {
            return Err(server_error("catalogue"));
        }
        self.inner.catalogue(query).await
    }

    async fn featured(&self) -> Result<Vec<Movie>, CatalogueError> {
        tokio::time::sleep(self.base_delay).await;
        if self.fail_featured {
            return Err(server_error("catalogue/featured"));
        }
        self.inner.featured().await
    }

    async fn genres(&self) -> Result<Vec<String>, CatalogueError> {
        tokio::time::sleep(self.base_delay).await;
        self.inner.genres().await
    }

    async fn movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogueError> {
        tokio::time::sleep(self.base_delay).await;
        self.inner.movie(id).await
    }
}

pub fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|movie| movie.title.as_str()).collect()
}

/// Headless elements that post their events to `sender` and record their
/// commands in the shared `log`.
pub fn headless_factory(sender: MessageSender, log: CommandLog, autoplay_blocked: bool) -> MediaFactory {
    Box::new(
        move |session: SessionId, movie: &Movie| -> Box<dyn MediaElement> {
            let sender = sender.clone();
            let sink: EventSink = Box::new(move |event| {
                let _ = sender.send(Message::Media(session, event));
            });
            let element =
                HeadlessMediaElement::new(movie.nominal_duration_secs(), log.clone(), sink);
            if autoplay_blocked {
                Box::new(element.with_autoplay_blocked())
            } else {
                Box::new(element)
            }
        },
    )
}
