// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest parsing (TOML, HCL, and JSON)

use crate::job::{ConfigError, CronJobDef, JobDefinition};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Manifest file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

/// Errors that can occur during manifest parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A parsed cron manifest.
///
/// Jobs keep their declaration order so installs are deterministic across
/// build runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, alias = "cron")]
    pub crons: IndexMap<String, CronJobDef>,
}

impl Manifest {
    /// Get a cron job definition by name
    pub fn get_cron(&self, name: &str) -> Option<&CronJobDef> {
        self.crons.get(name)
    }

    /// Validate every job, in manifest order.
    pub fn jobs(&self) -> Result<Vec<JobDefinition>, ConfigError> {
        self.crons.values().map(CronJobDef::validate).collect()
    }
}

/// Parse a manifest from TOML content (convenience wrapper)
pub fn parse_manifest(content: &str) -> Result<Manifest, ParseError> {
    parse_manifest_with_format(content, Format::Toml)
}

/// Parse a manifest from the given content in the specified format
pub fn parse_manifest_with_format(content: &str, format: Format) -> Result<Manifest, ParseError> {
    // 1. Serde does the heavy lifting
    let mut manifest: Manifest = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    // 2. Name fixup — inject map keys into .name fields
    for (name, cron) in &mut manifest.crons {
        cron.name = name.clone();
    }

    // 3. Validation — option combinations are checked per job so bad
    //    definitions fail at parse time, not at install
    for cron in manifest.crons.values() {
        cron.validate()?;
    }

    // 4. Warn when 'at' shadows explicit five-field values
    for (name, cron) in &manifest.crons {
        let at_set = cron.at.as_deref().is_some_and(|at| !at.trim().is_empty());
        if at_set && cron.has_explicit_fields() {
            tracing::warn!(
                "cron.{}: 'at' is set and overrides the minute/hour/day-of-month/\
                 month/day-of-week fields",
                name
            );
        }
    }

    Ok(manifest)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
