// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron job definitions
//!
//! [`CronJobDef`] is the raw, serde-facing shape of one job as declared in
//! a manifest (or assembled by the host build tool from resolved options).
//! [`CronJobDef::validate`] checks option combinations and produces a
//! [`JobDefinition`], the canonical form everything downstream consumes.
//!
//! Validation performs no filesystem access; it only inspects options.

use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sentinel for an unrestricted schedule field.
const WILDCARD: &str = "*";

fn default_location() -> String {
    "cron.d".to_string()
}

fn default_field() -> String {
    WILDCARD.to_string()
}

/// Errors from validating a cron job definition
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cron job name must not be empty")]
    EmptyName,

    #[error("cron.{job}: cannot set both 'script' and 'command'")]
    ScriptAndCommand { job: String },

    #[error("cron.{job}: one of 'script' or 'command' is required")]
    MissingAction { job: String },

    #[error("cron.{job}: 'user' is required to run the command as")]
    MissingUser { job: String },

    #[error(
        "cron.{job}: job would run every minute; set one of 'at', 'minute', \
         'hour', 'day-of-month', 'month' or 'day-of-week'"
    )]
    UnrestrictedSchedule { job: String },

    #[error("cron.{job}: environment variable line '{line}' must be 'NAME value'")]
    MalformedEnvVar { job: String, line: String },
}

/// A cron job definition as declared in a manifest.
///
/// All options are raw strings; defaults follow crontab conventions. A
/// blank string is equivalent to an unset option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronJobDef {
    /// Job name (injected from map key); names the fragment file and the
    /// per-job script directory
    #[serde(skip)]
    pub name: String,
    /// Output directory for the crontab fragment
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_field")]
    pub minute: String,
    #[serde(default = "default_field")]
    pub hour: String,
    #[serde(default = "default_field", rename = "day-of-month")]
    pub day_of_month: String,
    #[serde(default = "default_field")]
    pub month: String,
    #[serde(default = "default_field", rename = "day-of-week")]
    pub day_of_week: String,
    /// `@`-shorthand schedule (e.g. "daily"); overrides the five fields
    #[serde(default)]
    pub at: Option<String>,
    /// Account the job runs as
    #[serde(default)]
    pub user: Option<String>,
    /// Literal script body, materialized as an executable file at install
    #[serde(default)]
    pub script: Option<String>,
    /// Shell command embedded directly in the rule; mutually exclusive
    /// with `script`
    #[serde(default)]
    pub command: Option<String>,
    /// Newline-separated comment lines emitted at the top of the fragment
    #[serde(default)]
    pub comments: Option<String>,
    /// Newline-separated `NAME value` pairs emitted as `NAME=value` lines
    #[serde(default, rename = "environment-vars")]
    pub environment_vars: Option<String>,
}

/// What a cron job executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronAction {
    /// Script body written to `<parts>/<name>/script` at install time
    Script(String),
    /// Shell command embedded in the rule (trimmed, newlines collapsed)
    Command(String),
}

/// An environment variable assignment emitted into the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// A validated cron job, ready for rendering and installation.
#[derive(Debug, Clone)]
pub struct JobDefinition {
    pub name: String,
    pub location: PathBuf,
    pub schedule: Schedule,
    pub user: String,
    pub action: CronAction,
    pub comments: Vec<String>,
    pub env: Vec<EnvVar>,
}

/// Treat blank strings as unset, matching crontab option conventions.
fn non_blank(opt: Option<&str>) -> Option<&str> {
    opt.filter(|s| !s.trim().is_empty())
}

/// A blank schedule field counts as its `*` default.
fn field_or_wildcard(field: &str) -> &str {
    if field.trim().is_empty() {
        WILDCARD
    } else {
        field
    }
}

impl CronJobDef {
    /// Check option combinations and produce the canonical [`JobDefinition`].
    ///
    /// Fails when both or neither of `script`/`command` are set, when `user`
    /// is missing, when the schedule is left fully unrestricted (the job
    /// would run every minute), or when an `environment-vars` line is not a
    /// `NAME value` pair.
    pub fn validate(&self) -> Result<JobDefinition, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let script = non_blank(self.script.as_deref());
        let command = non_blank(self.command.as_deref());
        let action = match (script, command) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::ScriptAndCommand {
                    job: self.name.clone(),
                })
            }
            (Some(body), None) => CronAction::Script(body.to_string()),
            (None, Some(cmd)) => CronAction::Command(cmd.trim().replace('\n', " ")),
            (None, None) => {
                return Err(ConfigError::MissingAction {
                    job: self.name.clone(),
                })
            }
        };

        let user = match non_blank(self.user.as_deref()) {
            Some(user) => user.trim().to_string(),
            None => {
                return Err(ConfigError::MissingUser {
                    job: self.name.clone(),
                })
            }
        };

        let schedule = match non_blank(self.at.as_deref()) {
            Some(at) => Schedule::At(at.to_string()),
            None => {
                if !self.has_explicit_fields() {
                    return Err(ConfigError::UnrestrictedSchedule {
                        job: self.name.clone(),
                    });
                }
                Schedule::Fields {
                    minute: field_or_wildcard(&self.minute).to_string(),
                    hour: field_or_wildcard(&self.hour).to_string(),
                    day_of_month: field_or_wildcard(&self.day_of_month).to_string(),
                    month: field_or_wildcard(&self.month).to_string(),
                    day_of_week: field_or_wildcard(&self.day_of_week).to_string(),
                }
            }
        };

        let comments = self
            .comments
            .as_deref()
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let mut env = Vec::new();
        for line in self.environment_vars.as_deref().unwrap_or_default().lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(name), Some(value), None) => env.push(EnvVar {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
                _ => {
                    return Err(ConfigError::MalformedEnvVar {
                        job: self.name.clone(),
                        line: line.to_string(),
                    })
                }
            }
        }

        Ok(JobDefinition {
            name: self.name.clone(),
            location: PathBuf::from(&self.location),
            schedule,
            user,
            action,
            comments,
            env,
        })
    }

    /// True if any of the five schedule fields is set to a non-`*` value.
    pub(crate) fn has_explicit_fields(&self) -> bool {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
        .into_iter()
        .any(|field| field_or_wildcard(field) != WILDCARD)
    }
}

impl JobDefinition {
    /// Path of the materialized script under the build's parts directory.
    ///
    /// `None` for command jobs, which have nothing to materialize.
    pub fn script_path(&self, parts_dir: &Path) -> Option<PathBuf> {
        match self.action {
            CronAction::Script(_) => Some(parts_dir.join(&self.name).join("script")),
            CronAction::Command(_) => None,
        }
    }

    /// Path of the crontab fragment: `<location>/<name>`.
    pub fn fragment_path(&self) -> PathBuf {
        self.location.join(&self.name)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
