//! Schedule projection.
//!
//! [`project`] expands the rotation over `horizon_cycles` full cycles of the
//! roster and labels every period relative to the current period counter:
//!
//! ```text
//! current = 4, roster = [A, B, C], horizon = 3
//!
//! period    1  2  3  4  5  6  7  8  9
//! recipient A  B  C  A  B  C  A  B  C
//! status    R  R  R  C  S  S  S  S  S      R = Received, C = Current, S = Scheduled
//! ```
//!
//! The current period is never reported as `Received`: its payout has not
//! been handed over until the counter advances past it.

pub mod error;

pub use error::ScheduleError;

use std::fmt;

use tracing::{debug, warn};

use crate::member::{Member, MemberId};
use crate::rotation::{self, math};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Number of full rotations shown when the caller does not choose a horizon.
pub const DEFAULT_HORIZON_CYCLES: u32 = 3;

/// Largest horizon a configuration may request.
pub const MAX_HORIZON_CYCLES: u32 = 1_000;

/// Upper bound on the number of entries a single projection may return.
pub const MAX_SCHEDULE_ENTRIES: u64 = 100_000;

// ── EntryStatus ───────────────────────────────────────────────────────────────

/// Payout status of one period relative to the current period counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The period is in the past; its payout has been handed over.
    Received,
    /// The period the group is currently in.
    Current,
    /// A future period.
    Scheduled,
}

impl EntryStatus {
    /// Classify `period` against `current_period`.
    pub fn classify(period: u64, current_period: u64) -> Self {
        use std::cmp::Ordering;
        match period.cmp(&current_period) {
            Ordering::Less => EntryStatus::Received,
            Ordering::Equal => EntryStatus::Current,
            Ordering::Greater => EntryStatus::Scheduled,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryStatus::Received => "Received",
            EntryStatus::Current => "Current",
            EntryStatus::Scheduled => "Scheduled",
        };
        f.write_str(s)
    }
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One row of a projected schedule.  Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub period: u64,
    pub recipient_id: MemberId,
    pub status: EntryStatus,
}

// ── Projector ─────────────────────────────────────────────────────────────────

/// Project the payout schedule for periods `1 ..= roster.len() * horizon_cycles`.
///
/// # Arguments
/// * `current_period` – the group's period counter (must be ≥ 1).
/// * `roster` – read-only roster snapshot in rotation order.
/// * `horizon_cycles` – number of full rotations to cover (must be ≥ 1).
///
/// Returns a fresh `Vec` on every call; identical inputs always produce
/// identical output.  An empty roster yields an empty schedule once the
/// inputs have been validated.
///
/// # Errors
/// * [`ScheduleError::CurrentPeriodOutOfDomain`] – `current_period < 1`.
/// * [`ScheduleError::InvalidHorizon`] – `horizon_cycles == 0`.
/// * [`ScheduleError::HorizonOverflow`] – the period range does not fit in `i64`.
/// * [`ScheduleError::HorizonTooLarge`] – more than [`MAX_SCHEDULE_ENTRIES`]
///   entries would be produced.
/// * [`ScheduleError::Rotation`] – the roster's identifiers are not `1..=N`.
pub fn project(
    current_period: i64,
    roster: &[Member],
    horizon_cycles: u32,
) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    // ── Input validation ──────────────────────────────────────────────────────
    let current = math::validate_period(current_period).map_err(|_| {
        ScheduleError::CurrentPeriodOutOfDomain {
            period: current_period,
        }
    })?;
    if horizon_cycles == 0 {
        return Err(ScheduleError::InvalidHorizon {
            cycles: horizon_cycles,
        });
    }

    if roster.is_empty() {
        warn!("Roster is empty, nothing scheduled");
        return Ok(Vec::new());
    }

    let last_period = math::horizon_len(roster.len() as u64, u64::from(horizon_cycles))
        .filter(|&n| n <= i64::MAX as u64)
        .ok_or(ScheduleError::HorizonOverflow {
            roster_size: roster.len(),
            cycles: horizon_cycles,
        })?;
    if last_period > MAX_SCHEDULE_ENTRIES {
        return Err(ScheduleError::HorizonTooLarge {
            entries: last_period,
            limit: MAX_SCHEDULE_ENTRIES,
        });
    }

    // ── Projection ────────────────────────────────────────────────────────────
    let entries = (1..=last_period)
        .map(|period| -> Result<ScheduleEntry, ScheduleError> {
            // last_period ≤ i64::MAX was checked above
            let recipient = rotation::recipient_for(period as i64, roster)?;
            Ok(ScheduleEntry {
                period,
                recipient_id: recipient.id,
                status: EntryStatus::classify(period, current),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        current_period = current,
        roster_size = roster.len(),
        horizon_cycles,
        entries = entries.len(),
        "Projected schedule"
    );

    Ok(entries)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
