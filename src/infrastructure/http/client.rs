// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing the [`CatalogueService`] port.

use super::wire::{genres_from, movies_from, page_from, MovieRecord};
use crate::application::port::CatalogueService;
use crate::domain::catalogue::{CataloguePage, CatalogueQuery, Movie, MovieId};
use crate::domain::error::CatalogueError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Catalogue client talking to the service over HTTP.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpCatalogueClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogueClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// A missing scheme is completed with `http://` and a trailing slash is
    /// dropped, so `localhost:8001/api/` works.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidBaseUrl`] when the URL cannot be
    /// parsed or cannot carry a path, and [`CatalogueError::Transport`] if the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogueError> {
        let normalized = normalize_base_url(base_url);
        let parsed = Url::parse(&normalized).map_err(|e| CatalogueError::InvalidBaseUrl {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CatalogueError::InvalidBaseUrl {
                url: normalized,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;

        log::info!("catalogue client using {parsed}");
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{segments...}?{pairs}`.
    fn endpoint(&self, segments: &[&str], pairs: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// GETs `url` and parses the body as JSON.
    ///
    /// `Ok(None)` for a 404 so lookups can report absence.
    async fn get_json(&self, url: Url) -> Result<Option<Value>, CatalogueError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogueError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| CatalogueError::Decode(e.to_string()))
    }

    /// Like [`get_json`](Self::get_json), but a 404 is an error.
    async fn get_list(&self, url: Url) -> Result<Value, CatalogueError> {
        let url_text = url.to_string();
        self.get_json(url).await?.ok_or(CatalogueError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: url_text,
        })
    }
}

#[async_trait]
impl CatalogueService for HttpCatalogueClient {
    async fn catalogue(&self, query: &CatalogueQuery) -> Result<CataloguePage, CatalogueError> {
        let url = self.endpoint(&["catalogue"], &query.to_pairs());
        let body = self.get_list(url).await?;
        Ok(page_from(&body))
    }

    async fn featured(&self) -> Result<Vec<Movie>, CatalogueError> {
        let url = self.endpoint(&["catalogue", "featured"], &[]);
        let body = self.get_list(url).await?;
        Ok(movies_from(&body))
    }

    async fn genres(&self) -> Result<Vec<String>, CatalogueError> {
        let url = self.endpoint(&["catalogue", "genres"], &[]);
        let body = self.get_list(url).await?;
        Ok(genres_from(&body))
    }

    async fn movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogueError> {
        let url = self.endpoint(&["catalogue", id.as_str()], &[]);
        let Some(body) = self.get_json(url).await? else {
            return Ok(None);
        };
        serde_json::from_value::<MovieRecord>(body)
            .map(|record| Some(Movie::from(record)))
            .map_err(|e| CatalogueError::Decode(e.to_string()))
    }
}

/// Completes a missing scheme and strips trailing slashes.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if normalized != raw {
        log::warn!("normalized catalogue base URL from '{raw}' to '{normalized}'");
    }
    normalized
}

fn transport(error: reqwest::Error) -> CatalogueError {
    if error.is_timeout() {
        CatalogueError::Transport(format!("timed out: {error}"))
    } else {
        CatalogueError::Transport(error.to_string())
    }
}
