// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crontab fragment rendering
//!
//! Pure functions from a validated [`JobDefinition`] to the text written
//! under the `cron.d`-style location. Rendering never touches the
//! filesystem; the parts directory is only needed to name the script path
//! inside the rule.

use crate::job::{CronAction, JobDefinition};
use std::path::Path;

/// Render the single-line schedule rule.
///
/// `<schedule-head> <user> <target>` where the target is the materialized
/// script path for script jobs or the command itself. No trailing newline.
pub fn render_rule(job: &JobDefinition, parts_dir: &Path) -> String {
    let target = match &job.action {
        CronAction::Script(_) => parts_dir
            .join(&job.name)
            .join("script")
            .display()
            .to_string(),
        CronAction::Command(command) => command.clone(),
    };
    format!("{} {} {}", job.schedule, job.user, target)
}

/// Render the full crontab fragment.
///
/// Comment lines first (each `# `-prefixed, followed by one blank line if
/// any), then `NAME=value` lines (followed by one blank line if any), then
/// the rule. The rule line carries no trailing newline.
pub fn render_fragment(job: &JobDefinition, parts_dir: &Path) -> String {
    let mut out = String::new();

    for line in &job.comments {
        out.push_str(&format!("# {}\n", line));
    }
    if !job.comments.is_empty() {
        out.push('\n');
    }

    for var in &job.env {
        out.push_str(&format!("{}={}\n", var.name, var.value));
    }
    if !job.env.is_empty() {
        out.push('\n');
    }

    out.push_str(&render_rule(job, parts_dir));
    out
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
