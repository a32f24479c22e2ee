// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module coordinates reads against the remote catalogue.
//!
//! # Available Services
//!
//! - [`coordinator`]: Filter state and race-free catalogue display
//!   (`CatalogueCoordinator`)
//! - [`request`]: Tagged requests and their responses
//! - [`sequence`]: Monotonic request ids
//!
//! # Design Notes
//!
//! The coordinator never awaits anything itself. It hands out request values,
//! the host executes them against a [`CatalogueService`](crate::application::port::CatalogueService),
//! and the responses are applied back in whatever order they resolve.

pub mod coordinator;
pub mod request;
pub mod sequence;

// Re-export main types
pub use coordinator::{ApplyOutcome, BootstrapStatus, CatalogueCoordinator};
pub use request::{
    BootstrapData, BootstrapRequest, BootstrapResponse, CatalogueRequest, CatalogueResponse,
};
pub use sequence::{RequestId, RequestSequence};
