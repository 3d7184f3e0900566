// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end install behavior: manifest in, files on disk out.

use crate::prelude::BuildTree;
use cronsmith_manifest::Format;

#[test]
fn command_job_produces_fragment() {
    let tree = BuildTree::new();
    let jobs = tree.jobs(
        r#"
[cron.backup]
minute  = "30"
hour    = "2"
user    = "root"
command = "echo hi"
"#,
        Format::Toml,
    );

    let installed = tree.installer().install(&jobs[0]).unwrap();
    assert_eq!(installed, vec![tree.location().join("backup")]);
    similar_asserts::assert_eq!(tree.read(&installed[0]), "30 2 * * * root echo hi");
}

#[test]
fn full_fragment_layout() {
    let tree = BuildTree::new();
    let jobs = tree.jobs(
        r#"
cron "report" {
    at       = "weekly"
    user     = "ops"
    command  = "report.sh"
    comments = "Weekly usage report\nOwned by the ops team"

    environment-vars = "MAILTO ops@example.com\nPATH /usr/local/bin"
}
"#,
        Format::Hcl,
    );

    let installed = tree.installer().install(&jobs[0]).unwrap();
    similar_asserts::assert_eq!(
        tree.read(&installed[0]),
        "# Weekly usage report\n# Owned by the ops team\n\n\
         MAILTO=ops@example.com\nPATH=/usr/local/bin\n\n\
         @weekly ops report.sh"
    );
}

#[test]
fn script_job_materializes_executable_script() {
    let tree = BuildTree::new();
    let jobs = tree.jobs(
        r##"
cron "cleanup" {
    at     = "daily"
    user   = "root"
    script = "#!/bin/sh\nrm -rf /tmp/scratch\n"
}
"##,
        Format::Hcl,
    );

    let installed = tree.installer().install(&jobs[0]).unwrap();
    assert_eq!(installed.len(), 2);

    let script_path = tree.parts_dir().join("cleanup").join("script");
    assert_eq!(installed[0], script_path);
    similar_asserts::assert_eq!(tree.read(&script_path), "#!/bin/sh\nrm -rf /tmp/scratch\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&script_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    similar_asserts::assert_eq!(
        tree.read(&installed[1]),
        format!("@daily root {}", script_path.display())
    );
}

#[test]
fn reinstall_replaces_fragment_content() {
    let tree = BuildTree::new();
    let installer = tree.installer();

    let first = tree.jobs(
        "[cron.job]\nminute = \"1\"\nuser = \"root\"\ncommand = \"echo first run with longer text\"",
        Format::Toml,
    );
    installer.install(&first[0]).unwrap();

    let second = tree.jobs(
        "[cron.job]\nminute = \"2\"\nuser = \"root\"\ncommand = \"echo second\"",
        Format::Toml,
    );
    let installed = installer.install(&second[0]).unwrap();
    similar_asserts::assert_eq!(tree.read(&installed[0]), "2 * * * * root echo second");
}

#[test]
fn same_name_last_writer_wins() {
    let tree = BuildTree::new();
    let installer = tree.installer();

    let jobs = tree.jobs(
        r#"
[cron.dupe]
minute  = "1"
user    = "root"
command = "echo a"
"#,
        Format::Toml,
    );
    installer.install(&jobs[0]).unwrap();

    let jobs = tree.jobs(
        r#"
[cron.dupe]
minute  = "2"
user    = "deploy"
command = "echo b"
"#,
        Format::Toml,
    );
    installer.install(&jobs[0]).unwrap();

    similar_asserts::assert_eq!(
        tree.read(&tree.location().join("dupe")),
        "2 * * * * deploy echo b"
    );
}

#[test]
fn update_is_a_no_op() {
    let tree = BuildTree::new();
    let jobs = tree.jobs(
        "[cron.job]\nminute = \"1\"\nuser = \"root\"\ncommand = \"echo hi\"",
        Format::Toml,
    );

    let installer = tree.installer();
    assert!(installer.update(&jobs[0]).unwrap().is_empty());
    assert!(!tree.location().join("job").exists());
}
