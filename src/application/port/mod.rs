// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalogue`]: Remote catalogue reads (async)
//! - [`media`]: Media element commands and events (sync, event-driven)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no HTTP client or player handles)
//! - `CatalogueService` is `Send + Sync` so one client can serve every request
//! - `MediaElement` commands return nothing; outcomes arrive as [`MediaEvent`]s

pub mod catalogue;
pub mod media;

// Re-export main types for convenience
pub use catalogue::CatalogueService;
pub use media::{MediaElement, MediaEvent};
