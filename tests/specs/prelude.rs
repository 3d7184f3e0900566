// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for spec tests.

use cronsmith_install::Installer;
use cronsmith_manifest::{parse_manifest_with_format, Format, JobDefinition};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch build tree: a temp root with `parts/` and `cron.d/` inside.
pub struct BuildTree {
    pub root: TempDir,
}

impl BuildTree {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn parts_dir(&self) -> PathBuf {
        self.root.path().join("parts")
    }

    pub fn location(&self) -> PathBuf {
        self.root.path().join("cron.d")
    }

    pub fn installer(&self) -> Installer {
        Installer::new(self.parts_dir())
    }

    /// Parse a manifest, rewriting each job's `location` into this tree.
    pub fn jobs(&self, content: &str, format: Format) -> Vec<JobDefinition> {
        let mut manifest = parse_manifest_with_format(content, format).unwrap();
        let location = self.location().display().to_string();
        for cron in manifest.crons.values_mut() {
            cron.location = location.clone();
        }
        manifest.jobs().unwrap()
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }
}
