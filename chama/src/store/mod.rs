/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Durable group state: the ordered roster and the period counter.
//!
//! Two traits describe the collaborators the pure rotation code relies on:
//!
//! * [`RosterStore`] – append-only roster; identifiers are assigned `len + 1`
//!   so the roster always carries exactly `1..=N`.
//! * [`PeriodStore`] – the period counter, starting at `1` and advanced by
//!   exactly one per call.
//!
//! [`MemoryStore`] keeps everything in memory; [`FileStore`] persists the same
//! [`GroupState`] as JSON after every mutation.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::FileStore;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::member::{first_gap, Member, MemberId};
use crate::rotation;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Names used by [`RosterStore::seed_demo`].
pub const DEMO_MEMBER_NAMES: [&str; 10] = [
    "Alice K.",
    "Ben C.",
    "Chantal M.",
    "David O.",
    "Eve W.",
    "Faisal N.",
    "Grace R.",
    "Henry L.",
    "Irene B.",
    "Juma T.",
];

/// Mail domain of the demo contacts.
pub const DEMO_CONTACT_DOMAIN: &str = "jobil.com";

// ── Store traits ──────────────────────────────────────────────────────────────

/// Ordered, append-only member roster.
pub trait RosterStore {
    /// Read-only roster snapshot in rotation order.
    fn members(&self) -> &[Member];

    /// Look up a member by contact identifier (case-insensitive).
    fn find_by_contact(&self, contact: &str) -> Option<&Member> {
        self.members().iter().find(|m| m.has_contact(contact))
    }

    /// Append a new member and return it with its assigned identifier.
    ///
    /// # Errors
    /// * [`StoreError::InvalidInput`] – blank name or contact.
    /// * [`StoreError::DuplicateContact`] – contact already registered.
    fn register(&mut self, name: &str, contact: &str) -> Result<Member, StoreError>;

    /// Fill an empty roster with the ten demo members.  Returns the number of
    /// members added.
    fn seed_demo(&mut self) -> Result<usize, StoreError>;
}

/// Durable period counter.
pub trait PeriodStore {
    /// Current period (always ≥ 1).
    fn current_period(&self) -> u64;

    /// Close the current period and move to the next one.
    ///
    /// The recipient of the closing period (if any) is credited with one
    /// received payout.  Returns the new current period.
    fn advance_period(&mut self) -> Result<u64, StoreError>;
}

// ── GroupState ────────────────────────────────────────────────────────────────

/// Everything that has to survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default = "default_period")]
    pub current_period: u64,
}

fn default_period() -> u64 {
    1
}

impl Default for GroupState {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            current_period: default_period(),
        }
    }
}

impl GroupState {
    /// Check the invariants the rotation depends on.
    ///
    /// # Errors
    /// [`StoreError::InvalidState`] if the counter is `0`, the identifiers are
    /// not `1..=N` in order, or two members share a contact.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.current_period == 0 {
            return Err(StoreError::InvalidState {
                reason: "period counter must be at least 1".to_string(),
            });
        }
        if self.current_period > i64::MAX as u64 {
            return Err(StoreError::InvalidState {
                reason: format!("period counter {} is out of range", self.current_period),
            });
        }
        if let Some(id) = first_gap(&self.members) {
            return Err(StoreError::InvalidState {
                reason: format!(
                    "member identifiers must be 1..={} in order, found id {id} out of place",
                    self.members.len()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(self.members.len());
        for m in &self.members {
            if !seen.insert(m.contact.to_ascii_lowercase()) {
                return Err(StoreError::InvalidState {
                    reason: format!("contact '{}' is registered twice", m.contact),
                });
            }
        }
        Ok(())
    }

    fn register(&mut self, name: &str, contact: &str) -> Result<Member, StoreError> {
        let name = name.trim();
        let contact = contact.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput { field: "name" });
        }
        if contact.is_empty() {
            return Err(StoreError::InvalidInput { field: "contact" });
        }
        if self.members.iter().any(|m| m.has_contact(contact)) {
            return Err(StoreError::DuplicateContact {
                contact: contact.to_string(),
            });
        }

        let member = Member::new(self.members.len() as u64 + 1, name, contact);
        self.members.push(member.clone());

        info!(id = %member.id, name = %member.name, "Registered member");
        Ok(member)
    }

    /// Increment the informational `periods_received` counter of `id`.
    fn mark_received(&mut self, id: MemberId) -> Result<(), StoreError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::UnknownMember { id })?;
        member.periods_received = member.periods_received.saturating_add(1);
        debug!(id = %id, received = member.periods_received, "Credited payout");
        Ok(())
    }

    fn advance(&mut self) -> Result<u64, StoreError> {
        let closing = self.current_period;
        let next = closing
            .checked_add(1)
            .filter(|&p| p <= i64::MAX as u64)
            .ok_or(StoreError::PeriodOverflow { period: closing })?;

        // closing ≤ i64::MAX is guaranteed by validate() and the filter above
        match rotation::recipient_id_for(closing as i64, self.members.len()) {
            Ok(id) => self.mark_received(id)?,
            Err(_) => debug!(period = closing, "No recipient to credit for closing period"),
        }

        self.current_period = next;
        Ok(next)
    }

    fn seed_demo(&mut self) -> Result<usize, StoreError> {
        if !self.members.is_empty() {
            return Err(StoreError::RosterNotEmpty {
                size: self.members.len(),
            });
        }
        for name in DEMO_MEMBER_NAMES {
            self.register(name, &demo_contact(name))?;
        }
        info!("Initialized {} demo members", self.members.len());
        Ok(self.members.len())
    }
}

/// Contact used for a demo member: lowercase name without whitespace at the
/// demo domain, e.g. `Alice K.` → `alicek.@jobil.com`.
pub fn demo_contact(name: &str) -> String {
    let local: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("{local}@{DEMO_CONTACT_DOMAIN}")
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-memory group store.  Starts with an empty roster at period 1.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: GroupState,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing state after validating it.
    pub fn from_state(state: GroupState) -> Result<Self, StoreError> {
        state.validate()?;
        Ok(Self { state })
    }
}

impl RosterStore for MemoryStore {
    fn members(&self) -> &[Member] {
        &self.state.members
    }

    fn register(&mut self, name: &str, contact: &str) -> Result<Member, StoreError> {
        self.state.register(name, contact)
    }

    fn seed_demo(&mut self) -> Result<usize, StoreError> {
        self.state.seed_demo()
    }
}

impl PeriodStore for MemoryStore {
    fn current_period(&self) -> u64 {
        self.state.current_period
    }

    fn advance_period(&mut self) -> Result<u64, StoreError> {
        let next = self.state.advance()?;
        info!(period = next, "Advanced period");
        Ok(next)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
