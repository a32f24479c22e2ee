// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type for the configuration layer and the binary.
//!
//! Component failures keep their own types ([`CatalogueError`],
//! [`PlaybackError`]); this enum wraps them where they cross into
//! application setup.

use crate::domain::error::{CatalogueError, PlaybackError};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalogue Error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("Playback Error: {0}")]
    Playback(#[from] PlaybackError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Catalogue(CatalogueError::Transport(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
