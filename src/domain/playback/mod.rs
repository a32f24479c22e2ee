// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod state;
pub mod time;

// Re-export commonly used types
pub use newtypes::{OverlayTimeout, ScrubFraction, Volume};
pub use state::PlayerState;
pub use time::{format_optional_time, format_time};
