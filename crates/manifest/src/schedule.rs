// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule rules for cron jobs

use std::fmt;

/// When a job runs: an `@`-shorthand or the five standard cron fields.
///
/// `Display` renders the head of a crontab rule, so `At("daily")` formats
/// as `@daily` and the field form as `minute hour day-of-month month
/// day-of-week` joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Shorthand schedule, rendered with a leading `@` (e.g. `@daily`)
    At(String),
    /// Five-field cron schedule in standard order
    Fields {
        minute: String,
        hour: String,
        day_of_month: String,
        month: String,
        day_of_week: String,
    },
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::At(name) => write!(f, "@{}", name),
            Schedule::Fields {
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
            } => write!(
                f,
                "{} {} {} {} {}",
                minute, hour, day_of_month, month, day_of_week
            ),
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
