/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers: period validation, slot and cycle computation.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of any roster.

use super::RotationError;

/// Validate a caller-supplied period number and convert it to the unsigned
/// domain used internally.
///
/// Periods start at `1`; zero and negative values are rejected here so that
/// no signed modulo ever runs on them.
pub fn validate_period(period: i64) -> Result<u64, RotationError> {
    if period < 1 {
        return Err(RotationError::PeriodOutOfDomain { period });
    }
    // period ≥ 1 so the cast is lossless
    Ok(period as u64)
}

/// 1-based rotation slot for `period` in a roster of `size` members:
/// `((period - 1) mod size) + 1`.
///
/// Returns `None` when `size == 0` (no slot exists) or `period == 0`.
pub fn slot_for(period: u64, size: u64) -> Option<u64> {
    if size == 0 || period == 0 {
        return None;
    }
    Some((period - 1) % size + 1)
}

/// 1-based rotation cycle that `period` falls into: `((period - 1) / size) + 1`.
///
/// Returns `None` under the same conditions as [`slot_for`].
pub fn cycle_of(period: u64, size: u64) -> Option<u64> {
    if size == 0 || period == 0 {
        return None;
    }
    Some((period - 1) / size + 1)
}

/// Number of periods covered by `cycles` full rotations of `size` members.
///
/// Returns `None` if the product overflows `u64`.
pub fn horizon_len(size: u64, cycles: u64) -> Option<u64> {
    size.checked_mul(cycles)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
