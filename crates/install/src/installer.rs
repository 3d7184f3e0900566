// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron job installation.
//!
//! Writes the artifacts rendered from a validated [`JobDefinition`]: the
//! optional helper script (made executable) and the crontab fragment.
//! Install is not transactional — an I/O error aborts mid-way and leaves
//! whatever was already written in place, and re-running overwrites the
//! previous artifacts entirely.
//!
//! ## Testability
//!
//! All file operations go through the [`InstallWriter`] trait, so tests can
//! substitute a recording fake instead of touching real paths.

use cronsmith_manifest::{render_fragment, CronAction, JobDefinition};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from installing a cron job
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Trait abstracting installer I/O for testability.
pub trait InstallWriter {
    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or overwrite a file with the given content.
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Add execute bits for owner, group, and other, preserving the
    /// existing mode bits.
    fn make_executable(&self, path: &Path) -> io::Result<()>;
}

/// Production install writer using real filesystem operations.
#[derive(Debug, Clone, Default)]
pub struct FsInstallWriter;

impl InstallWriter for FsInstallWriter {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }

    fn make_executable(&self, path: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(path)?.permissions().mode();
            fs::set_permissions(path, fs::Permissions::from_mode(mode | 0o111))?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}

/// Installs cron jobs for one build run.
///
/// Holds the build-provided parts directory, under which each script job
/// gets a `<name>/script` working file.
pub struct Installer<W: InstallWriter = FsInstallWriter> {
    writer: W,
    parts_dir: PathBuf,
}

impl Installer<FsInstallWriter> {
    /// Create an installer with the default filesystem writer.
    pub fn new(parts_dir: PathBuf) -> Self {
        Self::with_writer(FsInstallWriter, parts_dir)
    }
}

impl<W: InstallWriter> Installer<W> {
    /// Create an installer with a custom writer (for testing).
    pub fn with_writer(writer: W, parts_dir: PathBuf) -> Self {
        Self { writer, parts_dir }
    }

    /// The build-provided parts directory.
    pub fn parts_dir(&self) -> &Path {
        &self.parts_dir
    }

    /// Materialize one job's artifacts.
    ///
    /// Creates the fragment location (with parents), writes the script for
    /// script jobs and marks it executable, then writes the fragment at
    /// `<location>/<name>`. Returns the paths written in order: script
    /// first when present, then fragment.
    ///
    /// I/O errors propagate unmodified; files already written stay.
    pub fn install(&self, job: &JobDefinition) -> Result<Vec<PathBuf>, InstallError> {
        let mut installed = Vec::new();

        self.writer.create_dir_all(&job.location)?;

        if let CronAction::Script(body) = &job.action {
            let script_dir = self.parts_dir.join(&job.name);
            self.writer.create_dir_all(&script_dir)?;

            let script_path = script_dir.join("script");
            self.writer.write_file(&script_path, body.as_bytes())?;
            self.writer.make_executable(&script_path)?;

            tracing::debug!(
                job = %job.name,
                path = %script_path.display(),
                "installed cron script"
            );
            installed.push(script_path);
        }

        let fragment_path = job.fragment_path();
        let fragment = render_fragment(job, &self.parts_dir);
        self.writer
            .write_file(&fragment_path, fragment.as_bytes())?;

        tracing::debug!(
            job = %job.name,
            path = %fragment_path.display(),
            "installed crontab fragment"
        );
        installed.push(fragment_path);

        Ok(installed)
    }

    /// Hook for a future incremental-install mode.
    ///
    /// Nothing is diffed today; every build run rewrites artifacts through
    /// [`Installer::install`]. Writes nothing and returns an empty list.
    pub fn update(&self, _job: &JobDefinition) -> Result<Vec<PathBuf>, InstallError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
