// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and commands for the application.

use crate::application::playback::{AutoHideTimer, PlaybackEffect, SessionId, TimerId};
use crate::application::port::MediaEvent;
use crate::application::query::{
    BootstrapRequest, BootstrapResponse, CatalogueRequest, CatalogueResponse,
};
use crate::domain::catalogue::{GenreSelection, Movie};
use crate::domain::playback::ScrubFraction;

/// Top-level messages consumed by `App::update`. Every state change in the
/// application is the reaction to exactly one of these.
#[derive(Debug, Clone)]
pub enum Message {
    // User intents: catalogue
    SetGenre(GenreSelection),
    SetSearch(String),
    SubmitSearch,
    /// Re-run the initial load after a blocking failure.
    RetryBootstrap,

    // User intents: playback
    SelectMovie(Movie),
    Play,
    Pause,
    TogglePlayback,
    Seek(ScrubFraction),
    SetVolume(f32),
    /// Mouse movement over the session or any control interaction.
    UserActivity,
    CloseSession,

    // Completions
    Bootstrapped(BootstrapResponse),
    CatalogueLoaded(CatalogueResponse),
    /// An event emitted by the media element of a session.
    Media(SessionId, MediaEvent),
    AutoHideElapsed(TimerId),
}

/// Side effects requested by `App::update`, executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Bootstrap(BootstrapRequest),
    FetchCatalogue(CatalogueRequest),
    /// Schedule the timer, replacing any pending one.
    ArmAutoHide(AutoHideTimer),
    CancelAutoHide,
}

impl Command {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<PlaybackEffect> for Command {
    fn from(effect: PlaybackEffect) -> Self {
        match effect {
            PlaybackEffect::None => Self::None,
            PlaybackEffect::ArmAutoHide(timer) => Self::ArmAutoHide(timer),
            PlaybackEffect::CancelAutoHide => Self::CancelAutoHide,
        }
    }
}
