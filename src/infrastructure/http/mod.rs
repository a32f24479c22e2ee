// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing the [`CatalogueService`] port trait.
//!
//! # Design Notes
//!
//! - Endpoints hang off one configurable base URL (`{base}/catalogue`,
//!   `{base}/catalogue/featured`, `{base}/catalogue/genres`,
//!   `{base}/catalogue/{id}`)
//! - Non-2xx statuses map to [`CatalogueError::Status`]
//! - Bodies are decoded leniently (see [`wire`])
//!
//! [`CatalogueService`]: crate::application::port::CatalogueService
//! [`CatalogueError::Status`]: crate::domain::error::CatalogueError::Status

mod client;
pub mod wire;

pub use client::HttpCatalogueClient;
pub use wire::MovieRecord;
