/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Recipient rotation.
//!
//! The recipient of period `p` in a roster of `N` members is the member whose
//! identifier is `((p - 1) mod N) + 1`.  Period 1 goes to member 1, and the
//! rotation wraps every `N` periods.
//!
//! | Input | Result |
//! |-------|--------|
//! | empty roster, any period | `Err(NoRecipient)` |
//! | period ≤ 0 | `Err(PeriodOutOfDomain)` |
//! | slot id not present in roster | `Err(MissingMember)` |
//! | otherwise | `Ok(&Member)` |
//!
//! Everything here is a pure function over a borrowed roster snapshot.

pub mod math;

use tracing::trace;

use crate::member::{find_by_id, Member, MemberId};
use math::{slot_for, validate_period};

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur while resolving a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// The roster is empty, so no member can receive the payout.
    NoRecipient,

    /// The period number is below `1`.
    PeriodOutOfDomain { period: i64 },

    /// The rotation slot points at an identifier no member carries.
    ///
    /// Only possible when the roster breaks the contiguous `1..=N` rule.
    MissingMember { id: MemberId, roster_size: usize },
}

impl std::fmt::Display for RotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationError::NoRecipient => {
                write!(f, "no recipient: the roster is empty")
            }
            RotationError::PeriodOutOfDomain { period } => {
                write!(f, "period {period} is out of range (periods start at 1)")
            }
            RotationError::MissingMember { id, roster_size } => write!(
                f,
                "no member with id {id} in a roster of {roster_size} (identifiers must be 1..={roster_size})"
            ),
        }
    }
}

impl std::error::Error for RotationError {}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Identifier of the recipient for `period` in a roster of `roster_size`
/// members, without looking the member up.
///
/// # Errors
/// * [`RotationError::NoRecipient`] – `roster_size == 0`.
/// * [`RotationError::PeriodOutOfDomain`] – `period < 1`.
pub fn recipient_id_for(period: i64, roster_size: usize) -> Result<MemberId, RotationError> {
    if roster_size == 0 {
        return Err(RotationError::NoRecipient);
    }
    let period = validate_period(period)?;
    let slot = slot_for(period, roster_size as u64).ok_or(RotationError::NoRecipient)?;
    Ok(MemberId(slot))
}

/// Resolve the member who receives the payout for `period`.
///
/// # Example
/// ```rust
/// use chama::member::Member;
/// use chama::rotation::recipient_for;
///
/// let roster = vec![
///     Member::new(1, "A", "a@example.com"),
///     Member::new(2, "B", "b@example.com"),
///     Member::new(3, "C", "c@example.com"),
/// ];
///
/// assert_eq!(recipient_for(4, &roster).unwrap().name, "A");
/// ```
///
/// # Errors
/// See [`RotationError`].  The empty-roster check runs first, so an empty
/// roster yields `NoRecipient` for every period.
pub fn recipient_for(period: i64, roster: &[Member]) -> Result<&Member, RotationError> {
    let id = recipient_id_for(period, roster.len())?;

    let member = find_by_id(roster, id).ok_or(RotationError::MissingMember {
        id,
        roster_size: roster.len(),
    })?;

    trace!(period, recipient = %member.id, "resolved recipient");
    Ok(member)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
