// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Catalogue**: Service location and request timeout
//! - **Playback**: Autoplay, volume, and overlay auto-hide timeout

use crate::domain::playback::newtypes::{overlay_timeout_bounds, volume_bounds};

// ==========================================================================
// Catalogue Defaults
// ==========================================================================

/// Default catalogue service root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";

/// Default per-request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether a newly opened session asks the element to start immediately.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

/// Default auto-hide timeout for the control overlay (in seconds).
pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u32 = overlay_timeout_bounds::DEFAULT;

/// Minimum overlay timeout (in seconds).
pub const MIN_OVERLAY_TIMEOUT_SECS: u32 = overlay_timeout_bounds::MIN;

/// Maximum overlay timeout (in seconds).
pub const MAX_OVERLAY_TIMEOUT_SECS: u32 = overlay_timeout_bounds::MAX;
