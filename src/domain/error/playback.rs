// SPDX-License-Identifier: MPL-2.0
//! Playback error types.

use std::fmt;
use thiserror::Error;

/// Category of a media element failure.
///
/// Codes 1 to 4 follow the usual media-error numbering
/// (aborted, network, decode, source not supported).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    /// Fetching the media was aborted.
    Aborted,
    /// A network error interrupted the download.
    Network,
    /// The media could not be decoded.
    Decode,
    /// The source format or URL is not supported.
    UnsupportedSource,
    /// Anything the element could not classify.
    Other,
}

impl MediaErrorKind {
    /// Maps a numeric media error code to a kind.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::UnsupportedSource,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for MediaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Aborted => "playback aborted",
            Self::Network => "network error",
            Self::Decode => "media could not be decoded",
            Self::UnsupportedSource => "unsupported media source",
            Self::Other => "playback error",
        };
        f.write_str(label)
    }
}

/// The media element reported a failure for the open session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct PlaybackError {
    pub kind: MediaErrorKind,
    pub message: String,
}

impl PlaybackError {
    #[must_use]
    pub fn new(kind: MediaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A seek that could not be turned into a target time.
///
/// This reflects a timing race rather than a user mistake, so callers log
/// it and move on instead of surfacing it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSeekRequest {
    /// Metadata has not loaded yet, so there is no duration to scale by.
    #[error("seek rejected: duration not known yet")]
    DurationUnknown,
    /// No session is open.
    #[error("seek rejected: no open session")]
    NoSession,
}
