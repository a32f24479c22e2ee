// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the audio/video playback
//! primitive a session drives. Commands are fire-and-forget; the element
//! reports what actually happened through [`MediaEvent`]s, which the host
//! feeds back into the session controller.
//!
//! # Contract
//!
//! - `play()`/`pause()` are requests. The element confirms the transition
//!   with [`MediaEvent::Play`] or [`MediaEvent::Pause`], or not at all
//!   (autoplay policies may block a start)
//! - Failures are reported with [`MediaEvent::Error`], never by panicking
//! - After `release()` the element emits no further events

use crate::domain::error::MediaErrorKind;
use crate::domain::playback::Volume;
use std::fmt::Debug;

/// Events emitted by a media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position changed (seconds).
    TimeUpdate(f64),
    /// Metadata loaded; carries the media duration in seconds.
    LoadedMetadata(f64),
    /// The element started playing.
    Play,
    /// The element paused.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// The element failed.
    Error {
        kind: MediaErrorKind,
        message: String,
    },
}

/// Port for a single media element instance.
pub trait MediaElement: Debug {
    /// Binds the element to a source. With `autoplay` the element starts
    /// playing as soon as it can (best effort).
    fn load(&mut self, url: &str, autoplay: bool);

    /// Requests playback.
    fn play(&mut self);

    /// Requests a pause.
    fn pause(&mut self);

    /// Moves the playhead to an absolute time in seconds.
    fn set_current_time(&mut self, secs: f64);

    /// Sets the output volume.
    fn set_volume(&mut self, volume: Volume);

    /// Detaches the source and stops emitting events.
    fn release(&mut self);
}
