/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core member data structures for the chama rotation.
//!
//! ```text
//! register(name, contact) ──►  Member  ──(roster snapshot)──►  RotationResolver / ScheduleProjector
//!                               ↑ durable                         ↑ read-only &[Member]
//!                               id assigned by registration order
//! ```
//!
//! # Ownership model
//! `Member` values are **owned** by the group store.  The pure rotation code
//! only ever sees a borrowed `&[Member]` snapshot, so it cannot mutate the
//! roster and needs no locking.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── MemberId ──────────────────────────────────────────────────────────────────

/// 1-based member identifier, assigned in registration order.
///
/// A valid roster of `N` members carries exactly the identifiers `1..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Returns the raw identifier value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Member ────────────────────────────────────────────────────────────────────

/// One participant of the rotating-savings group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    // ── Identity ──────────────────────────────────────────────────────────────
    /// Position in the rotation (1-based).
    pub id: MemberId,

    /// Display name.
    pub name: String,

    /// Contact identifier (e-mail address).  Unique within a roster,
    /// compared case-insensitively.
    pub contact: String,

    // ── Bookkeeping ───────────────────────────────────────────────────────────
    /// Number of payouts this member has received.
    ///
    /// Informational only, the rotation rule never reads it.
    #[serde(default)]
    pub periods_received: u64,
}

impl Member {
    /// Create a member that has not received any payout yet.
    pub fn new(id: u64, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            contact: contact.into(),
            periods_received: 0,
        }
    }

    /// Returns `true` if `contact` refers to this member.
    pub fn has_contact(&self, contact: &str) -> bool {
        self.contact.eq_ignore_ascii_case(contact.trim())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Member ID: {})", self.name, self.id)
    }
}

// ── Roster helpers ────────────────────────────────────────────────────────────

/// Find the member carrying `id` in a roster snapshot.
pub fn find_by_id(roster: &[Member], id: MemberId) -> Option<&Member> {
    // Fast path: a well-formed roster stores id k at index k - 1.
    let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
    match roster.get(idx) {
        Some(m) if m.id == id => Some(m),
        _ => roster.iter().find(|m| m.id == id),
    }
}

/// Returns the first identifier that breaks the `1..=N` sequence, or `None`
/// if the roster is contiguous and in registration order.
pub fn first_gap(roster: &[Member]) -> Option<MemberId> {
    roster
        .iter()
        .zip(1u64..)
        .find(|(m, expected)| m.id.0 != *expected)
        .map(|(m, _)| m.id)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
