// SPDX-License-Identifier: MPL-2.0
//! Application layer: the two stateful components of the browser.
//!
//! - [`query`]: the catalogue coordinator, which turns filter changes into
//!   tagged fetches and applies only the newest response
//! - [`playback`]: the session controller, which drives one media element and
//!   the auto-hiding control overlay
//! - [`port`]: the catalogue service and media element traits both depend on
//!
//! Neither component performs I/O. Operations return request values or
//! effects, and the caller executes them and hands the outcome back. That
//! keeps every state transition synchronous and testable without a runtime.
//!
//! # Example
//!
//! ```
//! use cine_lens::application::query::CatalogueCoordinator;
//! use cine_lens::domain::catalogue::GenreSelection;
//!
//! let mut coordinator = CatalogueCoordinator::new();
//! let _bootstrap = coordinator.begin_bootstrap();
//! let request = coordinator.set_genre(GenreSelection::from_label("Drama"));
//! assert_eq!(request.query().genre(), Some("Drama"));
//! ```

pub mod playback;
pub mod port;
pub mod query;
