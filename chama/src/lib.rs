/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Chama – rotating-savings group payout rotation
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── member       – Member / MemberId and roster helpers
//! ├── rotation/    – recipient for a period (pure)
//! ├── schedule/    – schedule projection over N cycles (pure)
//! ├── store/       – durable roster + period counter (memory / JSON file)
//! ├── config/      – YAML group configuration
//! └── dashboard    – read-only view joining schedule, names and amounts
//! ```

pub mod config;
pub mod dashboard;
pub mod member;
pub mod rotation;
pub mod schedule;
pub mod store;
