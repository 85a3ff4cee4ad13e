/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for schedule projection.
//!
//! An empty roster is **not** an error for the projector: it yields an empty
//! schedule.  Only malformed inputs end up here.

use thiserror::Error;

use crate::rotation::RotationError;

/// Error returned from [`project()`](super::project).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The current period counter is below `1`.
    ///
    /// The projector rejects it instead of clamping so a corrupted counter
    /// surfaces immediately.
    #[error("current period {period} is out of range (periods start at 1)")]
    CurrentPeriodOutOfDomain { period: i64 },

    /// `horizon_cycles` was zero.
    #[error("horizon must cover at least one full rotation (got {cycles})")]
    InvalidHorizon { cycles: u32 },

    /// `roster_size * horizon_cycles` does not fit in a period number.
    #[error("schedule of {cycles} cycle(s) over {roster_size} member(s) overflows the period range")]
    HorizonOverflow { roster_size: usize, cycles: u32 },

    /// The schedule would hold more entries than the projector allows.
    #[error("schedule of {entries} entries exceeds the limit of {limit}")]
    HorizonTooLarge { entries: u64, limit: u64 },

    /// The roster breaks the contiguous identifier rule.
    #[error("roster cannot be rotated: {0}")]
    Rotation(#[from] RotationError),
}
