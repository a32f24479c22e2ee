// SPDX-License-Identifier: MPL-2.0
//! Playback session state machine.
//!
//! This module defines the externally visible states of the session
//! controller.

/// Visible state of the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// No session is open.
    #[default]
    Closed,
    /// A session is open.
    Open {
        /// Confirmed by the media element, never by a local command.
        is_playing: bool,
        /// Whether the control overlay is shown.
        show_controls: bool,
    },
}

impl PlayerState {
    /// Returns true if a session is open.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns true if the open session is confirmed playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(
            self,
            Self::Open {
                is_playing: true,
                ..
            }
        )
    }

    /// Returns true if the control overlay is visible.
    #[must_use]
    pub fn shows_controls(self) -> bool {
        matches!(
            self,
            Self::Open {
                show_controls: true,
                ..
            }
        )
    }
}
