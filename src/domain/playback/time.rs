// SPDX-License-Identifier: MPL-2.0
//! Transport time formatting.

/// Seconds per minute.
pub const SECS_PER_MINUTE: u64 = 60;

/// Formats a time in seconds as `minutes:seconds`.
///
/// Seconds are zero-padded to two digits and fractional seconds are
/// truncated. Zero, negative, and non-finite inputs format as `"0:00"`, which
/// is also what an unknown duration displays as. There is no hours field:
/// one hour formats as `"60:00"`.
///
/// # Examples
///
/// ```
/// use cine_lens::domain::playback::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3599.0), "59:59");
/// assert_eq!(format_time(59.999), "0:59");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 {
        secs.trunc() as u64
    } else {
        0
    };
    let minutes = whole / SECS_PER_MINUTE;
    let seconds = whole % SECS_PER_MINUTE;
    format!("{minutes}:{seconds:02}")
}

/// Formats an optional (possibly not yet known) time.
#[must_use]
pub fn format_optional_time(secs: Option<f64>) -> String {
    format_time(secs.unwrap_or(0.0))
}
