// SPDX-License-Identifier: MPL-2.0
//! Update logic: one message in, one command out.

use super::{App, Command, Message};

impl App {
    /// Applies `message` and returns the side effects it requires.
    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::SetGenre(genre) => Command::FetchCatalogue(self.catalogue.set_genre(genre)),
            Message::SetSearch(text) => Command::FetchCatalogue(self.catalogue.set_search(text)),
            Message::SubmitSearch => Command::FetchCatalogue(self.catalogue.submit_search()),
            Message::RetryBootstrap => Command::Bootstrap(self.catalogue.begin_bootstrap()),
            Message::Bootstrapped(response) => {
                self.catalogue.apply_bootstrap(response);
                Command::None
            }
            Message::CatalogueLoaded(response) => {
                self.catalogue.apply_catalogue(response);
                Command::None
            }
            Message::SelectMovie(movie) => {
                let session = self.player.next_session_id();
                let element = (self.media_factory)(session, &movie);
                self.player.open_session(movie, element).into()
            }
            Message::Play => self.player.play().into(),
            Message::Pause => self.player.pause().into(),
            Message::TogglePlayback => self.player.toggle().into(),
            // Rejections are logged by the controller and not surfaced.
            Message::Seek(fraction) => self
                .player
                .seek(fraction)
                .map_or(Command::None, Command::from),
            Message::SetVolume(volume) => self.player.set_volume(volume).into(),
            Message::UserActivity => self.player.user_activity().into(),
            Message::CloseSession => self.player.close_session().into(),
            Message::Media(session, event) => self.player.handle_media_event(session, event).into(),
            Message::AutoHideElapsed(timer) => {
                self.player.auto_hide_elapsed(timer);
                Command::None
            }
        }
    }
}
