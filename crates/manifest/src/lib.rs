// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Cron manifest parsing and job definition

mod fragment;
mod job;
mod parser;
mod schedule;

pub use fragment::{render_fragment, render_rule};
pub use job::{ConfigError, CronAction, CronJobDef, EnvVar, JobDefinition};
pub use parser::{parse_manifest, parse_manifest_with_format, Format, Manifest, ParseError};
pub use schedule::Schedule;
