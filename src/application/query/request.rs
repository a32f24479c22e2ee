// SPDX-License-Identifier: MPL-2.0
//! Tagged catalogue requests and their responses.
//!
//! Requests are plain values produced by the coordinator. Executing one
//! against a [`CatalogueService`] yields a response that still carries the
//! request's id, so the coordinator can decide on arrival whether it is
//! stale.

use super::sequence::RequestId;
use crate::application::port::CatalogueService;
use crate::domain::catalogue::{CataloguePage, CatalogueQuery, Movie};
use crate::domain::error::CatalogueError;

// =============================================================================
// Filter-driven fetch
// =============================================================================

/// A catalogue fetch issued for the filter state at issuance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueRequest {
    id: RequestId,
    query: CatalogueQuery,
}

impl CatalogueRequest {
    pub(crate) fn new(id: RequestId, query: CatalogueQuery) -> Self {
        Self { id, query }
    }

    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[must_use]
    pub fn query(&self) -> &CatalogueQuery {
        &self.query
    }

    /// Performs the fetch.
    pub async fn execute<S>(self, service: &S) -> CatalogueResponse
    where
        S: CatalogueService + ?Sized,
    {
        let outcome = service.catalogue(&self.query).await;
        CatalogueResponse {
            id: self.id,
            query: self.query,
            outcome,
        }
    }
}

/// Result of a [`CatalogueRequest`].
#[derive(Debug, Clone)]
pub struct CatalogueResponse {
    pub id: RequestId,
    pub query: CatalogueQuery,
    pub outcome: Result<CataloguePage, CatalogueError>,
}

// =============================================================================
// Bootstrap
// =============================================================================

/// The three initial fetches, issued together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapRequest {
    id: RequestId,
}

impl BootstrapRequest {
    pub(crate) fn new(id: RequestId) -> Self {
        Self { id }
    }

    /// Id shared with the unfiltered catalogue fetch.
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Runs the catalogue, featured, and genre fetches concurrently.
    ///
    /// Resolves once all three succeed, or with the first failure.
    pub async fn execute<S>(self, service: &S) -> BootstrapResponse
    where
        S: CatalogueService + ?Sized,
    {
        let unconstrained = CatalogueQuery::unconstrained();
        let outcome = tokio::try_join!(
            service.catalogue(&unconstrained),
            service.featured(),
            service.genres(),
        )
        .map(|(catalogue, featured, genres)| BootstrapData {
            catalogue,
            featured,
            genres,
        });

        BootstrapResponse {
            id: self.id,
            outcome,
        }
    }
}

/// Everything a successful bootstrap loads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootstrapData {
    pub catalogue: CataloguePage,
    pub featured: Vec<Movie>,
    pub genres: Vec<String>,
}

/// Result of a [`BootstrapRequest`].
#[derive(Debug, Clone)]
pub struct BootstrapResponse {
    pub id: RequestId,
    pub outcome: Result<BootstrapData, CatalogueError>,
}
