/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! JSON-file backed group store.
//!
//! The whole [`GroupState`] is rewritten after every mutation.  Writes go to a
//! sibling `*.tmp` file first and are renamed over the target, so a crash
//! mid-write leaves the previous state intact.
//!
//! ```json
//! {
//!   "members": [
//!     { "id": 1, "name": "Alice K.", "contact": "alicek.@jobil.com", "periods_received": 0 }
//!   ],
//!   "current_period": 1
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{GroupState, PeriodStore, RosterStore, StoreError};
use crate::member::Member;

/// Group store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    state: GroupState,
}

impl FileStore {
    /// Open the state file at `path`.
    ///
    /// A missing file is not an error: the store starts empty at period 1 and
    /// the file is created on the first mutation.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, or violates a roster invariant (see [`GroupState::validate`]).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let state = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let state: GroupState =
                serde_json::from_str(&content).map_err(|source| StoreError::Json {
                    path: path.clone(),
                    source,
                })?;
            state.validate()?;
            info!(
                path = %path.display(),
                members = state.members.len(),
                period = state.current_period,
                "Loaded group state"
            );
            state
        } else {
            info!(path = %path.display(), "No state file yet, starting a new group");
            GroupState::default()
        };

        Ok(Self { path, state })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `f` to a copy of the state, persist the copy, then commit it.
    ///
    /// If either step fails the in-memory state is left untouched.
    fn mutate<T>(
        &mut self,
        f: impl FnOnce(&mut GroupState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.state.clone();
        let out = f(&mut next)?;
        self.persist(&next)?;
        self.state = next;
        Ok(out)
    }

    fn persist(&self, state: &GroupState) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), "Persisted group state");
        Ok(())
    }
}

impl RosterStore for FileStore {
    fn members(&self) -> &[Member] {
        &self.state.members
    }

    fn register(&mut self, name: &str, contact: &str) -> Result<Member, StoreError> {
        self.mutate(|s| s.register(name, contact))
    }

    fn seed_demo(&mut self) -> Result<usize, StoreError> {
        self.mutate(|s| s.seed_demo())
    }
}

impl PeriodStore for FileStore {
    fn current_period(&self) -> u64 {
        self.state.current_period
    }

    fn advance_period(&mut self) -> Result<u64, StoreError> {
        let next = self.mutate(|s| s.advance())?;
        info!(period = next, "Advanced period");
        Ok(next)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
