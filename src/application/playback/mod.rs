// SPDX-License-Identifier: MPL-2.0
//! Playback session control.
//!
//! - [`controller`]: The session state machine (`PlaybackController`)
//! - [`session`]: The open session record and its derived display state
//! - [`auto_hide`]: Timer handles for hiding the control overlay
//!
//! # Design Notes
//!
//! The controller reacts to one event at a time and returns a
//! [`PlaybackEffect`] instead of scheduling anything itself. Hosts run the
//! timers and feed elapsed timer ids back in.

pub mod auto_hide;
pub mod controller;
pub mod session;

pub use auto_hide::{AutoHideTimer, AutoHideTimers, TimerId};
pub use controller::{PlaybackController, PlaybackEffect, PlaybackSettings};
pub use session::{PlaybackSession, SessionId};
