// SPDX-License-Identifier: MPL-2.0
//! Monotonic request tagging.
//!
//! Every catalogue fetch is tagged with a [`RequestId`] when it is issued.
//! Only the response carrying the highest issued id may touch visible
//! state; anything older is stale, however late or early it arrives.

use std::fmt;

/// Sequence number of an issued catalogue request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids and tracks whether the newest one has resolved.
#[derive(Debug, Default)]
pub struct RequestSequence {
    highest_issued: u64,
    current_settled: bool,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a new request. The returned id supersedes every earlier one.
    pub fn issue(&mut self) -> RequestId {
        self.highest_issued += 1;
        self.current_settled = false;
        RequestId(self.highest_issued)
    }

    /// Returns true if `id` is the most recently issued request.
    #[must_use]
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.highest_issued
    }

    /// The most recently issued id, if any request was issued.
    #[must_use]
    pub fn current(&self) -> Option<RequestId> {
        (self.highest_issued > 0).then_some(RequestId(self.highest_issued))
    }

    /// Marks `id` as resolved.
    ///
    /// Returns `false` (and changes nothing) when `id` is stale or was
    /// already settled, in which case its result must be discarded.
    pub fn settle(&mut self, id: RequestId) -> bool {
        if !self.is_current(id) || self.current_settled {
            return false;
        }
        self.current_settled = true;
        true
    }

    /// Returns true while the newest request is unresolved.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.highest_issued > 0 && !self.current_settled
    }
}
