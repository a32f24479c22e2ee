// SPDX-License-Identifier: MPL-2.0
//! The record of one open playback session.
//!
//! A session is bound to one movie and owns exactly one media element and
//! at most one armed auto-hide timer. Mutation goes through the
//! [`PlaybackController`](super::PlaybackController); this type exposes the
//! derived display state.

use super::auto_hide::AutoHideTimer;
use crate::application::port::MediaElement;
use crate::domain::catalogue::Movie;
use crate::domain::error::PlaybackError;
use crate::domain::playback::{format_optional_time, format_time, Volume};
use std::fmt;

/// Identifies one session, so events from an element that belonged to an
/// earlier session can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub(super) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// State of an open session.
#[derive(Debug)]
pub struct PlaybackSession {
    pub(super) id: SessionId,
    pub(super) movie: Movie,
    pub(super) element: Box<dyn MediaElement>,
    /// Last play/pause command issued locally.
    pub(super) requested_playing: bool,
    /// Last play/pause transition the element confirmed.
    pub(super) confirmed_playing: bool,
    pub(super) position_secs: f64,
    pub(super) duration_secs: Option<f64>,
    pub(super) volume: Volume,
    pub(super) show_controls: bool,
    pub(super) auto_hide: Option<AutoHideTimer>,
    pub(super) error: Option<PlaybackError>,
}

impl PlaybackSession {
    pub(super) fn new(
        id: SessionId,
        movie: Movie,
        element: Box<dyn MediaElement>,
        volume: Volume,
    ) -> Self {
        Self {
            id,
            movie,
            element,
            requested_playing: false,
            confirmed_playing: false,
            position_secs: 0.0,
            duration_secs: None,
            volume,
            show_controls: true,
            auto_hide: None,
            error: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Confirmed playing state. This is what the UI shows.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.confirmed_playing
    }

    /// Whether the last local command asked for playback.
    #[must_use]
    pub fn is_play_requested(&self) -> bool {
        self.requested_playing
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Media duration, once metadata has loaded.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn shows_controls(&self) -> bool {
        self.show_controls
    }

    /// The currently armed auto-hide timer.
    #[must_use]
    pub fn auto_hide(&self) -> Option<AutoHideTimer> {
        self.auto_hide
    }

    /// The failure the element reported, if any.
    #[must_use]
    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    /// Scrub bar fill in `[0, 1]`; `0.0` until a non-zero duration is known.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        match self.duration_secs {
            Some(duration) if duration > 0.0 => (self.position_secs / duration).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_time(self.position_secs)
    }

    #[must_use]
    pub fn duration_label(&self) -> String {
        format_optional_time(self.duration_secs)
    }

    /// `"elapsed / duration"`, e.g. `"1:05 / 136:00"`.
    #[must_use]
    pub fn time_display(&self) -> String {
        format!("{} / {}", self.elapsed_label(), self.duration_label())
    }
}
