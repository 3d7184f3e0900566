// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Materialize cron jobs to disk: helper scripts and crontab fragments

mod installer;

pub use installer::{FsInstallWriter, InstallError, InstallWriter, Installer};
