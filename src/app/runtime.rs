// SPDX-License-Identifier: MPL-2.0
//! Single-threaded executor for application commands.
//!
//! Catalogue requests become futures polled concurrently; when one resolves,
//! its response is fed back to `App::update` as a message. Media elements
//! post their events through a [`MessageSender`]. Messages are processed one
//! at a time, each running to completion before the next is taken.
//!
//! Must be driven from a tokio current-thread runtime (the futures are not
//! `Send`).

use super::{App, Command, Message};
use crate::application::playback::TimerId;
use crate::application::port::CatalogueService;
use futures_util::future::LocalBoxFuture;
use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Posts messages into a [`Runtime`] from outside `App::update`.
pub type MessageSender = mpsc::UnboundedSender<Message>;

/// Receiving half handed to [`Runtime::new`].
pub type MessageInbox = mpsc::UnboundedReceiver<Message>;

/// Creates the channel media element sinks post through.
///
/// Created before the [`App`] so its media factory can capture the sender.
#[must_use]
pub fn channel() -> (MessageSender, MessageInbox) {
    mpsc::unbounded_channel()
}

/// Drives an [`App`] against a catalogue service.
pub struct Runtime {
    app: App,
    service: Arc<dyn CatalogueService>,
    inbox: MessageInbox,
    fetches: FuturesUnordered<LocalBoxFuture<'static, Message>>,
    /// Holds at most the one live auto-hide sleep.
    timers: FuturesUnordered<LocalBoxFuture<'static, Message>>,
    auto_hide: Option<TimerId>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("app", &self.app)
            .field("service", &self.service)
            .field("fetches_in_flight", &self.fetches.len())
            .field("auto_hide", &self.auto_hide)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    #[must_use]
    pub fn new(app: App, service: Arc<dyn CatalogueService>, inbox: MessageInbox) -> Self {
        Self {
            app,
            service,
            inbox,
            fetches: FuturesUnordered::new(),
            timers: FuturesUnordered::new(),
            auto_hide: None,
        }
    }

    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Number of catalogue requests not yet resolved.
    #[must_use]
    pub fn fetches_in_flight(&self) -> usize {
        self.fetches.len()
    }

    /// The auto-hide timer currently scheduled, if any.
    #[must_use]
    pub fn pending_auto_hide(&self) -> Option<TimerId> {
        self.auto_hide
    }

    /// Number of timer futures still held, cancelled or not.
    #[must_use]
    pub fn timers_held(&self) -> usize {
        self.timers.len()
    }

    /// Applies a message and schedules the resulting command.
    pub fn send(&mut self, message: Message) {
        let command = self.app.update(message);
        self.dispatch(command);
    }

    /// Schedules a command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Bootstrap(request) => {
                let service = Arc::clone(&self.service);
                self.fetches.push(
                    async move { Message::Bootstrapped(request.execute(service.as_ref()).await) }
                        .boxed_local(),
                );
            }
            Command::FetchCatalogue(request) => {
                let service = Arc::clone(&self.service);
                self.fetches.push(
                    async move {
                        Message::CatalogueLoaded(request.execute(service.as_ref()).await)
                    }
                    .boxed_local(),
                );
            }
            Command::ArmAutoHide(timer) => {
                self.cancel_auto_hide();
                self.auto_hide = Some(timer.id);
                self.timers.push(
                    async move {
                        tokio::time::sleep(timer.delay).await;
                        Message::AutoHideElapsed(timer.id)
                    }
                    .boxed_local(),
                );
            }
            Command::CancelAutoHide => self.cancel_auto_hide(),
        }
    }

    /// Drops the pending sleep, if any.
    fn cancel_auto_hide(&mut self) {
        self.auto_hide = None;
        self.timers.clear();
    }

    /// Processes every message already posted by media elements.
    pub fn drain_inbox(&mut self) {
        while let Ok(message) = self.inbox.try_recv() {
            self.send(message);
        }
    }

    /// Runs until no catalogue request is in flight and no posted message
    /// is waiting. Pending timers are left alone.
    pub async fn settle(&mut self) {
        loop {
            self.drain_inbox();
            match self.fetches.next().await {
                Some(message) => self.send(message),
                None => break,
            }
        }
        self.drain_inbox();
    }

    /// Runs for `duration`, handling responses, element events, and timers
    /// as they come due.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::sleep(duration);
        tokio::pin!(deadline);

        loop {
            self.drain_inbox();
            tokio::select! {
                biased;
                () = &mut deadline => break,
                Some(message) = self.inbox.recv() => self.send(message),
                Some(message) = self.fetches.next(), if !self.fetches.is_empty() => {
                    self.send(message);
                }
                Some(message) = self.timers.next(), if !self.timers.is_empty() => {
                    self.auto_hide = None;
                    self.send(message);
                }
            }
        }
        self.drain_inbox();
    }
}
