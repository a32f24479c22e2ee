// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Remote catalogue over HTTP (implements [`CatalogueService`])
//! - [`memory`]: Fixed in-memory catalogue (implements [`CatalogueService`])
//! - [`headless`]: Media element without output (implements [`MediaElement`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Transport and decoding details never leak past the port boundary
//!
//! [`CatalogueService`]: crate::application::port::CatalogueService
//! [`MediaElement`]: crate::application::port::MediaElement

pub mod headless;
pub mod http;
pub mod memory;

// Re-export main types for convenience
pub use headless::{CommandLog, EventSink, HeadlessMediaElement, MediaCommand};
pub use http::HttpCatalogueClient;
pub use memory::InMemoryCatalogue;
