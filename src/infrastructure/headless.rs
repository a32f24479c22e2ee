// SPDX-License-Identifier: MPL-2.0
//! Media element without an output device.
//!
//! [`HeadlessMediaElement`] implements the [`MediaElement`] port by echoing
//! the events a real element would emit: metadata after a load, play/pause
//! confirmations, time updates after a seek. It drives the CLI demo and the
//! integration tests.
//!
//! Every command is appended to a shared [`CommandLog`] so callers can
//! inspect what the controller asked for after handing the element over.

use crate::application::port::{MediaElement, MediaEvent};
use crate::domain::error::MediaErrorKind;
use crate::domain::playback::Volume;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use url::Url;

/// A command received by a [`HeadlessMediaElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load { url: String, autoplay: bool },
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
    Release,
}

/// Shared, inspectable record of received commands.
#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<MediaCommand>>>);

impl CommandLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn commands(&self) -> Vec<MediaCommand> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<MediaCommand> {
        self.0.borrow().last().cloned()
    }

    fn push(&self, command: MediaCommand) {
        self.0.borrow_mut().push(command);
    }
}

/// Receives the events an element emits.
pub type EventSink = Box<dyn Fn(MediaEvent)>;

/// A [`MediaElement`] that never renders anything.
pub struct HeadlessMediaElement {
    duration_secs: f64,
    autoplay_blocked: bool,
    loaded: bool,
    released: bool,
    log: CommandLog,
    sink: EventSink,
}

impl HeadlessMediaElement {
    /// Creates an element whose media lasts `duration_secs` once loaded.
    ///
    /// Negative or non-finite durations become zero.
    #[must_use]
    pub fn new(duration_secs: f64, log: CommandLog, sink: EventSink) -> Self {
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            duration_secs,
            autoplay_blocked: false,
            loaded: false,
            released: false,
            log,
            sink,
        }
    }

    /// Ignores autoplay requests, as a browser autoplay policy would.
    #[must_use]
    pub fn with_autoplay_blocked(mut self) -> Self {
        self.autoplay_blocked = true;
        self
    }

    fn emit(&self, event: MediaEvent) {
        if !self.released {
            (self.sink)(event);
        }
    }
}

impl fmt::Debug for HeadlessMediaElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessMediaElement")
            .field("duration_secs", &self.duration_secs)
            .field("loaded", &self.loaded)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

impl MediaElement for HeadlessMediaElement {
    fn load(&mut self, url: &str, autoplay: bool) {
        self.log.push(MediaCommand::Load {
            url: url.to_string(),
            autoplay,
        });

        if let Err(reason) = check_source(url) {
            self.loaded = false;
            self.emit(MediaEvent::Error {
                kind: MediaErrorKind::UnsupportedSource,
                message: reason,
            });
            return;
        }

        self.loaded = true;
        self.emit(MediaEvent::LoadedMetadata(self.duration_secs));
        if autoplay && !self.autoplay_blocked {
            self.emit(MediaEvent::Play);
        }
    }

    fn play(&mut self) {
        self.log.push(MediaCommand::Play);
        if self.loaded {
            self.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        self.log.push(MediaCommand::Pause);
        if self.loaded {
            self.emit(MediaEvent::Pause);
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        self.log.push(MediaCommand::Seek(secs));
        if self.loaded {
            self.emit(MediaEvent::TimeUpdate(secs.clamp(0.0, self.duration_secs)));
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        self.log.push(MediaCommand::SetVolume(volume.value()));
    }

    fn release(&mut self) {
        self.log.push(MediaCommand::Release);
        self.released = true;
        self.loaded = false;
    }
}

fn check_source(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("no media source".to_string());
    }
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| format!("cannot open '{url}': {e}"))
}
