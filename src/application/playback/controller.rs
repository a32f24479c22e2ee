// SPDX-License-Identifier: MPL-2.0
//! Playback session controller.
//!
//! Translates user gestures into media element commands and media element
//! events into visible session state. Every handler returns a
//! [`PlaybackEffect`] describing what the host must do with the auto-hide
//! timer; the controller itself never blocks or sleeps.
//!
//! `is_playing` is only ever changed by a confirmed [`MediaEvent`]. Local
//! play/pause commands record intent in `requested_playing` and nothing else.

use super::auto_hide::{AutoHideTimer, AutoHideTimers, TimerId};
use super::session::{PlaybackSession, SessionId};
use crate::application::port::{MediaElement, MediaEvent};
use crate::domain::catalogue::Movie;
use crate::domain::error::{InvalidSeekRequest, PlaybackError};
use crate::domain::playback::{OverlayTimeout, PlayerState, ScrubFraction, Volume};

/// Session defaults taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    /// Ask the element to start as soon as it can after opening.
    pub autoplay: bool,
    pub overlay_timeout: OverlayTimeout,
    pub initial_volume: Volume,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            overlay_timeout: OverlayTimeout::default(),
            initial_volume: Volume::default(),
        }
    }
}

/// Work the host must perform for the auto-hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEffect {
    /// Nothing to schedule.
    None,
    /// Schedule this timer, replacing any pending one.
    ArmAutoHide(AutoHideTimer),
    /// Drop the pending timer.
    CancelAutoHide,
}

/// Owns at most one open [`PlaybackSession`].
#[derive(Debug, Default)]
pub struct PlaybackController {
    settings: PlaybackSettings,
    timers: AutoHideTimers,
    last_session: u64,
    session: Option<PlaybackSession>,
}

impl PlaybackController {
    #[must_use]
    pub fn new(settings: PlaybackSettings) -> Self {
        Self {
            settings,
            timers: AutoHideTimers::new(settings.overlay_timeout),
            last_session: 0,
            session: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    /// Visible state machine position.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        match &self.session {
            None => PlayerState::Closed,
            Some(session) => PlayerState::Open {
                is_playing: session.confirmed_playing,
                show_controls: session.show_controls,
            },
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Id the next [`open_session`](Self::open_session) call will assign.
    ///
    /// Hosts use it to tag the event sink of the element they are about to
    /// hand over.
    #[must_use]
    pub fn next_session_id(&self) -> SessionId {
        SessionId(self.last_session + 1)
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Opens a session for `movie`, closing any open one first.
    ///
    /// The element is bound to the movie's media URL with a best-effort
    /// auto-start request. Playback is not considered started until the
    /// element confirms it.
    pub fn open_session(
        &mut self,
        movie: Movie,
        mut element: Box<dyn MediaElement>,
    ) -> PlaybackEffect {
        let previous = self.close_session();

        self.last_session += 1;
        let id = SessionId(self.last_session);
        log::info!("opening {id} for '{}'", movie.title);

        element.set_volume(self.settings.initial_volume);
        element.load(&movie.media_url, self.settings.autoplay);

        let mut session =
            PlaybackSession::new(id, movie, element, self.settings.initial_volume);
        session.requested_playing = self.settings.autoplay;
        self.session = Some(session);

        previous
    }

    /// Closes the open session, releasing its element and timer.
    ///
    /// Safe to call when no session is open.
    pub fn close_session(&mut self) -> PlaybackEffect {
        let Some(mut session) = self.session.take() else {
            return PlaybackEffect::None;
        };
        log::info!("closing {}", session.id);
        session.element.release();
        if session.auto_hide.take().is_some() {
            PlaybackEffect::CancelAutoHide
        } else {
            PlaybackEffect::None
        }
    }

    // =========================================================================
    // User gestures
    // =========================================================================

    /// Requests playback. Visible state changes on the confirming event.
    pub fn play(&mut self) -> PlaybackEffect {
        let Some(session) = self.session.as_mut() else {
            return PlaybackEffect::None;
        };
        session.requested_playing = true;
        session.element.play();
        register_activity(session, &mut self.timers)
    }

    /// Requests a pause. Visible state changes on the confirming event.
    pub fn pause(&mut self) -> PlaybackEffect {
        let Some(session) = self.session.as_mut() else {
            return PlaybackEffect::None;
        };
        session.requested_playing = false;
        session.element.pause();
        register_activity(session, &mut self.timers)
    }

    /// Plays when confirmed paused, pauses when confirmed playing.
    pub fn toggle(&mut self) -> PlaybackEffect {
        if self.state().is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Seeks to a position along the scrub bar.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeekRequest`] when no session is open or the
    /// duration is not known yet. Nothing changes in that case.
    pub fn seek(&mut self, fraction: ScrubFraction) -> Result<PlaybackEffect, InvalidSeekRequest> {
        let Some(session) = self.session.as_mut() else {
            log::debug!("{}", InvalidSeekRequest::NoSession);
            return Err(InvalidSeekRequest::NoSession);
        };
        let Some(duration) = session.duration_secs else {
            log::debug!("{} ({})", InvalidSeekRequest::DurationUnknown, session.id);
            return Err(InvalidSeekRequest::DurationUnknown);
        };

        let target = fraction.target_secs(duration);
        session.element.set_current_time(target);
        session.position_secs = target;
        Ok(register_activity(session, &mut self.timers))
    }

    /// Sets the output volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) -> PlaybackEffect {
        let Some(session) = self.session.as_mut() else {
            return PlaybackEffect::None;
        };
        let volume = Volume::new(volume);
        session.volume = volume;
        session.element.set_volume(volume);
        register_activity(session, &mut self.timers)
    }

    /// Mouse movement over the session or any control interaction.
    pub fn user_activity(&mut self) -> PlaybackEffect {
        match self.session.as_mut() {
            Some(session) => register_activity(session, &mut self.timers),
            None => PlaybackEffect::None,
        }
    }

    // =========================================================================
    // Element and timer events
    // =========================================================================

    /// Applies an event emitted by the element of session `from`.
    ///
    /// Events for a session that is no longer open are ignored.
    pub fn handle_media_event(&mut self, from: SessionId, event: MediaEvent) -> PlaybackEffect {
        let Some(session) = self.session.as_mut().filter(|s| s.id == from) else {
            log::debug!("ignoring {event:?} from closed {from}");
            return PlaybackEffect::None;
        };

        match event {
            MediaEvent::TimeUpdate(secs) => {
                if secs.is_finite() {
                    session.position_secs = clamp_position(secs, session.duration_secs);
                }
                PlaybackEffect::None
            }
            MediaEvent::LoadedMetadata(duration) => {
                if duration.is_finite() && duration >= 0.0 {
                    session.duration_secs = Some(duration);
                    session.position_secs = clamp_position(session.position_secs, Some(duration));
                } else {
                    log::debug!("ignoring unusable duration {duration} for {}", session.id);
                }
                PlaybackEffect::None
            }
            MediaEvent::Play => {
                let was_playing = session.confirmed_playing;
                session.confirmed_playing = true;
                session.requested_playing = true;
                session.error = None;
                if was_playing {
                    PlaybackEffect::None
                } else {
                    arm(session, &mut self.timers)
                }
            }
            MediaEvent::Pause => stop(session),
            MediaEvent::Ended => {
                if let Some(duration) = session.duration_secs {
                    session.position_secs = duration;
                }
                stop(session)
            }
            MediaEvent::Error { kind, message } => {
                let error = PlaybackError::new(kind, message);
                log::warn!("{} failed: {error}", session.id);
                session.error = Some(error);
                stop(session)
            }
        }
    }

    /// Handles a fired auto-hide timer. Returns true if the controls were
    /// hidden; a stale or cancelled timer changes nothing.
    pub fn auto_hide_elapsed(&mut self, id: TimerId) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.auto_hide {
            Some(timer) if timer.id == id && session.confirmed_playing => {
                session.auto_hide = None;
                session.show_controls = false;
                true
            }
            _ => {
                log::debug!("ignoring stale {id}");
                false
            }
        }
    }

    /// Changes the inactivity delay for timers armed from now on.
    pub fn set_overlay_timeout(&mut self, timeout: OverlayTimeout) {
        self.settings.overlay_timeout = timeout;
        self.timers.set_timeout(timeout);
    }
}

fn clamp_position(secs: f64, duration: Option<f64>) -> f64 {
    let secs = secs.max(0.0);
    match duration {
        Some(duration) => secs.min(duration),
        None => secs,
    }
}

fn register_activity(session: &mut PlaybackSession, timers: &mut AutoHideTimers) -> PlaybackEffect {
    session.show_controls = true;
    if session.confirmed_playing {
        arm(session, timers)
    } else {
        PlaybackEffect::None
    }
}

fn arm(session: &mut PlaybackSession, timers: &mut AutoHideTimers) -> PlaybackEffect {
    let timer = timers.arm();
    session.auto_hide = Some(timer);
    PlaybackEffect::ArmAutoHide(timer)
}

/// Confirmed stop: controls stay visible while not playing.
fn stop(session: &mut PlaybackSession) -> PlaybackEffect {
    session.confirmed_playing = false;
    session.requested_playing = false;
    session.show_controls = true;
    if session.auto_hide.take().is_some() {
        PlaybackEffect::CancelAutoHide
    } else {
        PlaybackEffect::None
    }
}
