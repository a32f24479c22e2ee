// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalogue and the
//! player.
//!
//! The `App` struct wires the catalogue coordinator and the playback
//! controller together and translates messages into commands. It performs
//! no I/O; the [`runtime`] executes commands and feeds their results back.

mod message;
pub mod runtime;
mod update;

pub use message::{Command, Message};
pub use runtime::{channel, MessageSender, Runtime};

use crate::application::playback::{PlaybackController, PlaybackSettings, SessionId};
use crate::application::port::MediaElement;
use crate::application::query::CatalogueCoordinator;
use crate::domain::catalogue::Movie;
use std::fmt;

/// Creates the media element for a new session.
///
/// Receives the id the session will carry, so the element's events can be
/// tagged with it.
pub type MediaFactory = Box<dyn FnMut(SessionId, &Movie) -> Box<dyn MediaElement>>;

/// Root application state.
pub struct App {
    catalogue: CatalogueCoordinator,
    player: PlaybackController,
    media_factory: MediaFactory,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalogue", &self.catalogue)
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates the application and the command for its initial load.
    #[must_use]
    pub fn new(settings: PlaybackSettings, media_factory: MediaFactory) -> (Self, Command) {
        let mut catalogue = CatalogueCoordinator::new();
        let bootstrap = catalogue.begin_bootstrap();
        let app = Self {
            catalogue,
            player: PlaybackController::new(settings),
            media_factory,
        };
        (app, Command::Bootstrap(bootstrap))
    }

    #[must_use]
    pub fn catalogue(&self) -> &CatalogueCoordinator {
        &self.catalogue
    }

    #[must_use]
    pub fn player(&self) -> &PlaybackController {
        &self.player
    }
}
