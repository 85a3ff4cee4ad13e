/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end flow over the file-backed store: register, project, advance,
//! reopen.

use tempfile::TempDir;

use chama::config::GroupConfig;
use chama::dashboard::Dashboard;
use chama::member::MemberId;
use chama::rotation::recipient_for;
use chama::schedule::{project, EntryStatus, DEFAULT_HORIZON_CYCLES};
use chama::store::{FileStore, PeriodStore, RosterStore, StoreError};

#[test]
fn register_advance_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut store = FileStore::open(&path).unwrap();
        for (name, contact) in [("A", "a@x.org"), ("B", "b@x.org"), ("C", "c@x.org")] {
            store.register(name, contact).unwrap();
        }
        for _ in 0..3 {
            store.advance_period().unwrap();
        }
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.current_period(), 4);

    let current = recipient_for(4, store.members()).unwrap();
    assert_eq!(current.name, "A");

    let entries = project(4, store.members(), DEFAULT_HORIZON_CYCLES).unwrap();
    assert_eq!(entries.len(), 9);
    assert!(entries[..3].iter().all(|e| e.status == EntryStatus::Received));
    assert_eq!(entries[3].status, EntryStatus::Current);
    assert_eq!(entries[3].recipient_id, MemberId(1));
    assert!(entries[4..].iter().all(|e| e.status == EntryStatus::Scheduled));

    // every member was credited once for periods 1..=3
    assert!(store.members().iter().all(|m| m.periods_received == 1));
}

#[test]
fn late_registration_extends_rotation() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path().join("state.json")).unwrap();
    store.register("A", "a@x.org").unwrap();
    store.register("B", "b@x.org").unwrap();
    store.advance_period().unwrap(); // period 2 → B

    let joined = store.register("C", "c@x.org").unwrap();
    assert_eq!(joined.id, MemberId(3));
    assert_eq!(recipient_for(3, store.members()).unwrap().name, "C");
    assert_eq!(project(2, store.members(), 1).unwrap().len(), 3);
}

#[test]
fn duplicate_registration_is_refused_and_not_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut store = FileStore::open(&path).unwrap();
    store.register("A", "a@x.org").unwrap();
    let err = store.register("A again", "A@X.ORG").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateContact { .. }));

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.members().len(), 1);
}

#[test]
fn seeded_demo_group_dashboard() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path().join("state.json")).unwrap();
    store.seed_demo().unwrap();

    let cfg = GroupConfig::default_config();
    let dashboard =
        Dashboard::build(&store, &cfg, cfg.horizon_cycles, Some("alicek.@jobil.com")).unwrap();

    assert_eq!(dashboard.rows.len(), 30);
    assert_eq!(dashboard.current_recipient.as_ref().unwrap().name, "Alice K.");
    assert_eq!(dashboard.rows[10].recipient_name, "Alice K.");
    assert_eq!(dashboard.rows[10].cycle, 2);

    let text = dashboard.render();
    assert!(text.contains("Welcome, Alice K."));
    assert!(text.contains("Juma T. (Member ID: 10)"));
}
