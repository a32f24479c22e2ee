// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timer handles for the control overlay.
//!
//! The controller never sleeps. Arming produces an [`AutoHideTimer`] value
//! the host schedules; when the delay elapses the host reports the timer's
//! [`TimerId`] back. Ids are never reused, so a report for a timer that has
//! since been re-armed or cancelled is recognisably stale.

use crate::domain::playback::OverlayTimeout;
use std::fmt;
use std::time::Duration;

/// Identifier of one armed auto-hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// A scheduled request to hide the controls after `delay` of inactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideTimer {
    pub id: TimerId,
    pub delay: Duration,
}

/// Issues timer handles with fresh ids.
#[derive(Debug)]
pub struct AutoHideTimers {
    last_id: u64,
    delay: Duration,
}

impl AutoHideTimers {
    #[must_use]
    pub fn new(timeout: OverlayTimeout) -> Self {
        Self {
            last_id: 0,
            delay: timeout.as_duration(),
        }
    }

    /// Creates a handle with an id no earlier handle carried.
    pub fn arm(&mut self) -> AutoHideTimer {
        self.last_id += 1;
        AutoHideTimer {
            id: TimerId(self.last_id),
            delay: self.delay,
        }
    }

    pub fn set_timeout(&mut self, timeout: OverlayTimeout) {
        self.delay = timeout.as_duration();
    }
}

impl Default for AutoHideTimers {
    fn default() -> Self {
        Self::new(OverlayTimeout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_three_seconds() {
        let mut timers = AutoHideTimers::default();
        assert_eq!(timers.arm().delay, Duration::from_secs(3));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut timers = AutoHideTimers::default();
        let first = timers.arm();
        let second = timers.arm();
        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn set_timeout_affects_later_timers_only() {
        let mut timers = AutoHideTimers::default();
        let before = timers.arm();
        timers.set_timeout(OverlayTimeout::new(10));
        let after = timers.arm();

        assert_eq!(before.delay, Duration::from_secs(3));
        assert_eq!(after.delay, Duration::from_secs(10));
    }
}
