// SPDX-License-Identifier: MPL-2.0
//! Catalogue service port definition.
//!
//! This module defines the [`CatalogueService`] trait for reading the remote
//! movie catalogue. Infrastructure adapters (HTTP, in-memory) implement it.
//!
//! # Design Notes
//!
//! - Every call is fallible and latency-variable; callers must not assume
//!   responses arrive in issuance order
//! - Absent or malformed list fields in a response are reported as empty
//!   lists, not as errors
//! - Uses domain types only (`Movie`, `CatalogueQuery`, `CatalogueError`)

use crate::domain::catalogue::{CataloguePage, CatalogueQuery, Movie, MovieId};
use crate::domain::error::CatalogueError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Port for catalogue reads.
#[async_trait]
pub trait CatalogueService: Send + Sync + Debug {
    /// Fetches the catalogue matching `query` (AND of the present constraints).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if the request fails or the response is
    /// not a JSON document.
    async fn catalogue(&self, query: &CatalogueQuery) -> Result<CataloguePage, CatalogueError>;

    /// Fetches the featured subset.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if the request fails.
    async fn featured(&self) -> Result<Vec<Movie>, CatalogueError>;

    /// Fetches the known genres.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if the request fails.
    async fn genres(&self) -> Result<Vec<String>, CatalogueError>;

    /// Looks a single movie up. `Ok(None)` when the service does not know it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if the request fails.
    async fn movie(&self, id: &MovieId) -> Result<Option<Movie>, CatalogueError>;
}
