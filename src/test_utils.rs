// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Positions, durations, volumes and scrub fractions are all floats, so tests
//! compare them with `approx` rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
