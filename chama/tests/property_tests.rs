/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use proptest::prelude::*;

use chama::member::{Member, MemberId};
use chama::rotation::{recipient_for, RotationError};
use chama::schedule::{project, EntryStatus, ScheduleError, MAX_SCHEDULE_ENTRIES};

fn roster(n: usize) -> Vec<Member> {
    (1..=n as u64)
        .map(|i| Member::new(i, format!("m{i}"), format!("m{i}@example.com")))
        .collect()
}

// =============================================================================
// Rotation is periodic in the roster size
// =============================================================================

proptest! {
    #[test]
    fn recipient_repeats_every_roster_size(n in 1usize..40, p in 1i64..1_000_000) {
        let r = roster(n);
        let a = recipient_for(p, &r).unwrap().id;
        let b = recipient_for(p + n as i64, &r).unwrap().id;
        prop_assert_eq!(a, b);
    }

    #[test]
    fn recipient_matches_slot_formula(n in 1usize..40, p in 1i64..1_000_000) {
        let r = roster(n);
        let expected = ((p - 1) as u64 % n as u64) + 1;
        prop_assert_eq!(recipient_for(p, &r).unwrap().id, MemberId(expected));
    }

    #[test]
    fn first_period_is_always_member_one(n in 1usize..100) {
        prop_assert_eq!(recipient_for(1, &roster(n)).unwrap().id, MemberId(1));
    }

    #[test]
    fn sole_member_receives_every_period(p in 1i64..i64::MAX) {
        prop_assert_eq!(recipient_for(p, &roster(1)).unwrap().id, MemberId(1));
    }

    #[test]
    fn empty_roster_never_resolves(p in any::<i64>()) {
        prop_assert_eq!(recipient_for(p, &[]), Err(RotationError::NoRecipient));
    }

    #[test]
    fn non_positive_periods_are_rejected(n in 1usize..20, p in i64::MIN..=0) {
        let r = roster(n);
        prop_assert_eq!(
            recipient_for(p, &r).map(|m| m.id),
            Err(RotationError::PeriodOutOfDomain { period: p })
        );
    }
}

// =============================================================================
// Projection covers whole cycles and labels statuses consistently
// =============================================================================

proptest! {
    #[test]
    fn projection_covers_horizon_in_order(n in 1usize..25, current in 1i64..200, h in 1u32..6) {
        let entries = project(current, &roster(n), h).unwrap();
        prop_assert_eq!(entries.len(), n * h as usize);
        for (i, e) in entries.iter().enumerate() {
            prop_assert_eq!(e.period, i as u64 + 1);
        }
    }

    #[test]
    fn projection_statuses_follow_current_period(n in 1usize..25, current in 1i64..200, h in 1u32..6) {
        let entries = project(current, &roster(n), h).unwrap();
        let current = current as u64;
        for e in &entries {
            let expected = if e.period < current {
                EntryStatus::Received
            } else if e.period == current {
                EntryStatus::Current
            } else {
                EntryStatus::Scheduled
            };
            prop_assert_eq!(e.status, expected);
        }
    }

    #[test]
    fn projection_agrees_with_resolver(n in 1usize..25, current in 1i64..200) {
        let r = roster(n);
        for e in project(current, &r, 3).unwrap() {
            prop_assert_eq!(e.recipient_id, recipient_for(e.period as i64, &r).unwrap().id);
        }
    }

    #[test]
    fn projection_is_idempotent(n in 0usize..25, current in 1i64..200, h in 1u32..6) {
        let r = roster(n);
        prop_assert_eq!(project(current, &r, h).unwrap(), project(current, &r, h).unwrap());
    }

    #[test]
    fn empty_roster_projects_nothing(current in 1i64..10_000, h in 1u32..10) {
        prop_assert!(project(current, &[], h).unwrap().is_empty());
    }

    #[test]
    fn projection_never_exceeds_entry_limit(n in 1usize..200, h in any::<u32>()) {
        match project(1, &roster(n), h) {
            Ok(entries) => prop_assert!(entries.len() as u64 <= MAX_SCHEDULE_ENTRIES),
            Err(e) => prop_assert!(
                matches!(e, ScheduleError::HorizonTooLarge { .. } | ScheduleError::InvalidHorizon { .. }),
                "unexpected error {}", e
            ),
        }
    }
}
