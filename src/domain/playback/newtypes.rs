// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use cine_lens::domain::playback::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// `NaN` maps to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// OverlayTimeout
// =============================================================================

/// Overlay timeout bounds in seconds.
pub mod overlay_timeout_bounds {
    /// Minimum timeout.
    pub const MIN: u32 = 1;
    /// Maximum timeout.
    pub const MAX: u32 = 30;
    /// Default timeout.
    pub const DEFAULT: u32 = 3;
}

/// Inactivity delay before the control overlay hides during playback.
///
/// # Example
///
/// ```
/// use cine_lens::domain::playback::OverlayTimeout;
///
/// let timeout = OverlayTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = OverlayTimeout::new(100);
/// assert_eq!(too_high.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimeout(u32);

impl OverlayTimeout {
    /// Creates a new overlay timeout value, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(overlay_timeout_bounds::MIN, overlay_timeout_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for OverlayTimeout {
    fn default() -> Self {
        Self(overlay_timeout_bounds::DEFAULT)
    }
}

// =============================================================================
// ScrubFraction
// =============================================================================

/// Click position along the scrub bar as a ratio of its width (0.0–1.0).
///
/// `NaN` maps to 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubFraction(f64);

impl ScrubFraction {
    /// Creates a fraction, clamping to `[0, 1]`.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Builds a fraction from a click offset and the bar width in pixels.
    ///
    /// A zero or negative width yields 0.0.
    #[must_use]
    pub fn from_offset(offset_px: f32, width_px: f32) -> Self {
        if width_px <= 0.0 {
            return Self(0.0);
        }
        Self::new(f64::from(offset_px) / f64::from(width_px))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Target time for a media of the given duration, within `[0, duration]`.
    #[must_use]
    pub fn target_secs(self, duration_secs: f64) -> f64 {
        (self.0 * duration_secs).clamp(0.0, duration_secs)
    }
}
