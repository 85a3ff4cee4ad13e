/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Error type for the group store.

use std::path::PathBuf;

use thiserror::Error;

use crate::member::MemberId;

/// Failure of a roster or period-counter operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required registration field was empty after trimming.
    #[error("{field} must not be blank")]
    InvalidInput { field: &'static str },

    /// Another member already uses this contact identifier.
    #[error("an account with contact '{contact}' already exists")]
    DuplicateContact { contact: String },

    /// Demo seeding only runs on an empty roster.
    #[error("roster already has {size} member(s); demo seeding needs an empty roster")]
    RosterNotEmpty { size: usize },

    /// No member carries this identifier.
    #[error("no member with id {id}")]
    UnknownMember { id: MemberId },

    /// The period counter cannot advance any further.
    #[error("period counter {period} cannot be advanced further")]
    PeriodOverflow { period: u64 },

    /// Loaded or supplied state violates a roster/counter invariant.
    #[error("invalid group state: {reason}")]
    InvalidState { reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed state file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
