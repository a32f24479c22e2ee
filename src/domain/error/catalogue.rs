// SPDX-License-Identifier: MPL-2.0
//! Catalogue fetch and load errors.

use thiserror::Error;

/// Message shown for any catalogue load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load movies. Please try again later.";

/// A single catalogue request failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// The configured service URL cannot be used.
    #[error("Invalid catalogue base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Catalogue request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Catalogue service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not a JSON document.
    #[error("Catalogue response could not be decoded: {0}")]
    Decode(String),
}

impl CatalogueError {
    /// Returns true for failures that a later retry may not hit.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidBaseUrl { .. } | Self::Decode(_) => false,
        }
    }
}

/// A catalogue load failed at the coordinator boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// One of the three initial fetches failed. Blocks the initial render.
    #[error("Bootstrap failed: {0}")]
    Bootstrap(#[source] CatalogueError),

    /// A filter-driven re-fetch failed. Prior results are kept.
    #[error("Catalogue query failed: {0}")]
    Query(#[source] CatalogueError),
}

impl LoadError {
    /// Returns true if the error blocks the catalogue view.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Bootstrap(_))
    }

    /// The underlying request failure.
    #[must_use]
    pub fn cause(&self) -> &CatalogueError {
        match self {
            Self::Bootstrap(cause) | Self::Query(cause) => cause,
        }
    }

    /// User-facing message.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}
