// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types and business rules.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `thiserror` for error derivation it depends only on `std`, so
//! it stays testable without any runtime or network.
//!
//! # Modules
//!
//! - [`catalogue`]: Catalogue types ([`Movie`](catalogue::Movie),
//!   [`FilterState`](catalogue::FilterState), [`CatalogueResult`](catalogue::CatalogueResult))
//! - [`error`]: Domain error types ([`LoadError`](error::LoadError),
//!   [`PlaybackError`](error::PlaybackError), [`InvalidSeekRequest`](error::InvalidSeekRequest))
//! - [`playback`]: Playback types ([`PlayerState`](playback::PlayerState),
//!   [`Volume`](playback::Volume), [`OverlayTimeout`](playback::OverlayTimeout))

pub mod catalogue;
pub mod error;
pub mod playback;
