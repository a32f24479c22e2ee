// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides the error taxonomy of the catalogue and playback
//! components, independent of transport and infrastructure concerns.

mod catalogue;
mod playback;

pub use catalogue::{CatalogueError, LoadError, LOAD_FAILED_MESSAGE};
pub use playback::{InvalidSeekRequest, MediaErrorKind, PlaybackError};
