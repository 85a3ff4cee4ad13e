/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Read-only dashboard view over a group store.
//!
//! Joins the projected [`ScheduleEntry`] sequence with member names and the
//! group's amounts so a front end only has to print it.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GroupConfig;
use crate::member::{find_by_id, Member};
use crate::rotation::{self, math, RotationError};
use crate::schedule::{self, EntryStatus, ScheduleEntry, ScheduleError};
use crate::store::{PeriodStore, RosterStore};

/// Failure while assembling a [`Dashboard`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The stored period counter does not fit the signed period domain.
    #[error("stored period {period} exceeds the supported range")]
    PeriodTooLarge { period: u64 },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// One schedule line with the recipient's name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub entry: ScheduleEntry,
    /// 1-based rotation cycle the period belongs to.
    pub cycle: u64,
    pub recipient_name: String,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub group_name: String,
    pub current_period: u64,
    /// `None` when the roster is empty.
    pub current_recipient: Option<Member>,
    pub contribution_amount: u64,
    pub payout_amount: u64,
    /// Sum of one period's contributions (`contribution × members`).
    pub pooled_per_period: u64,
    /// Set when the view was built for a known member.
    pub viewer: Option<Member>,
    pub rows: Vec<ScheduleRow>,
}

impl Dashboard {
    /// Build the view from the current store contents.
    ///
    /// `viewer_contact` selects the member greeted on the dashboard; an
    /// unknown contact is logged and ignored.
    ///
    /// # Errors
    /// * [`DashboardError::PeriodTooLarge`] – the store's counter exceeds `i64::MAX`.
    /// * [`DashboardError::Schedule`] – the projector rejected the inputs.
    ///
    /// An empty roster is not an error: the view has no current recipient and
    /// no rows.
    pub fn build<S>(
        store: &S,
        config: &GroupConfig,
        horizon_cycles: u32,
        viewer_contact: Option<&str>,
    ) -> Result<Self, DashboardError>
    where
        S: RosterStore + PeriodStore,
    {
        let roster = store.members();
        let current_period = store.current_period();
        let current = i64::try_from(current_period).map_err(|_| {
            DashboardError::PeriodTooLarge {
                period: current_period,
            }
        })?;

        let current_recipient = match rotation::recipient_for(current, roster) {
            Ok(m) => Some(m.clone()),
            Err(RotationError::NoRecipient) => None,
            Err(e) => return Err(ScheduleError::from(e).into()),
        };

        let entries = schedule::project(current, roster, horizon_cycles)?;
        let size = roster.len() as u64;
        let rows = entries
            .into_iter()
            .map(|entry| {
                let recipient_name = find_by_id(roster, entry.recipient_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_default();
                ScheduleRow {
                    cycle: math::cycle_of(entry.period, size).unwrap_or(0),
                    recipient_name,
                    entry,
                }
            })
            .collect::<Vec<_>>();

        let viewer = match viewer_contact {
            Some(contact) => {
                let found = store.find_by_contact(contact).cloned();
                if found.is_none() {
                    warn!(contact, "Viewer contact is not registered");
                }
                found
            }
            None => None,
        };

        debug!(
            current_period,
            rows = rows.len(),
            has_recipient = current_recipient.is_some(),
            "Built dashboard"
        );

        Ok(Self {
            group_name: config.name.clone(),
            current_period,
            current_recipient,
            contribution_amount: config.contribution_amount,
            payout_amount: config.payout_amount,
            pooled_per_period: config.contribution_amount.saturating_mul(size),
            viewer,
            rows,
        })
    }

    /// Plain text rendering: header lines followed by the schedule table.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.group_name);
        if let Some(viewer) = &self.viewer {
            let _ = writeln!(out, "Welcome, {}", viewer.name);
        }
        let _ = writeln!(out, "Week {}", self.current_period);
        match &self.current_recipient {
            Some(m) => {
                let _ = writeln!(out, "Current recipient: {m}");
            }
            None => {
                let _ = writeln!(out, "Current recipient: N/A");
            }
        }
        let _ = writeln!(
            out,
            "Contribution: {} per member | Payout: {} | Pooled per period: {}",
            self.contribution_amount, self.payout_amount, self.pooled_per_period
        );
        let _ = writeln!(out);

        if self.rows.is_empty() {
            let _ = writeln!(out, "Nothing scheduled.");
            return out;
        }

        let _ = writeln!(out, "{:>6} | {:<36} | {}", "Period", "Recipient", "Status");
        let _ = writeln!(out, "{:-<6}-+-{:-<36}-+-{:-<9}", "", "", "");
        for row in &self.rows {
            let marker = if row.entry.status == EntryStatus::Current {
                " <"
            } else {
                ""
            };
            let recipient = format!(
                "{} (Member ID: {})",
                row.recipient_name, row.entry.recipient_id
            );
            let _ = writeln!(
                out,
                "{:>6} | {:<36} | {}{}",
                row.entry.period, recipient, row.entry.status, marker
            );
        }
        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
