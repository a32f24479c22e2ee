// SPDX-License-Identifier: MPL-2.0
//! `cine_lens` is the core of a movie catalogue browser.
//!
//! It provides a catalogue query coordinator that keeps the displayed
//! catalogue consistent with the latest filter change, no matter in which
//! order the service answers, and a playback session controller that drives
//! a media element and its auto-hiding control overlay.

#![doc(html_root_url = "https://docs.rs/cine_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;
