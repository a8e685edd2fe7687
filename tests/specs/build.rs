//! Behavioral specs for `dev42 build`.
//!
//! Tests that dev42 correctly:
//! - creates bld/<package>/ and bin/
//! - runs cargo build from the repository root with CARGO_TARGET_DIR set
//! - appends the source remap flag to RUSTFLAGS
//! - installs the built binary into bin/ as an executable
//! - forwards cargo's exit code on failure

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use crate::prelude::*;

// =============================================================================
// SUCCESSFUL BUILD
// =============================================================================

/// > build creates bld/<package> and bin/ and installs the binary
#[test]
fn build_installs_binary_into_bin() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project)
        .args(["build", "foo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("create dir: "))
        .stdout(predicates::str::contains("run: "))
        .stdout(predicates::str::contains("install: "));

    assert!(project.path().join("bld/foo").is_dir());
    let installed = project.path().join("bin/foo");
    assert!(installed.is_file());
    assert_eq!(project.read("bin/foo"), "#!/bin/sh\necho hello from foo\n");
}

/// > The installed binary is mode 0755
#[test]
fn installed_binary_is_executable() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project).args(["build", "foo"]).assert().success();

    let mode = std::fs::metadata(project.path().join("bin/foo"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);

    std::process::Command::new(project.path().join("bin/foo"))
        .assert()
        .success()
        .stdout("hello from foo\n");
}

/// > The binary is named after package.name, not the directory
#[test]
fn binary_is_named_after_manifest() {
    let project = Project::rust("accounts", "tally42");

    dev42_fake(&project)
        .args(["build", "accounts"])
        .assert()
        .success();

    assert!(project.path().join("bld/accounts").is_dir());
    assert!(project.path().join("bin/tally42").is_file());
    assert!(!project.path().join("bin/accounts").exists());
}

/// > cargo is invoked as `build --manifest-path src/<package>/Cargo.toml`
#[test]
fn cargo_receives_manifest_path() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project).args(["build", "foo"]).assert().success();

    let manifest = project.path().join("src/foo/Cargo.toml");
    assert_eq!(
        project.read("bld/foo/cargo-args"),
        format!("build\n--manifest-path\n{}\n", manifest.display())
    );
}

/// > cargo runs with the repository root as working directory
#[test]
fn cargo_runs_from_repo_root() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project).args(["build", "foo"]).assert().success();

    let cwd = project.read("bld/foo/cargo-cwd");
    let cwd = std::fs::canonicalize(cwd.trim()).unwrap();
    assert_eq!(cwd, std::fs::canonicalize(project.path()).unwrap());
}

/// > cargo output is streamed through unmodified
#[test]
fn cargo_output_is_passed_through() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project)
        .args(["build", "foo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("fake cargo build\n"));
}

/// > Existing RUSTFLAGS are kept and the remap flag is appended
#[test]
fn rustflags_are_appended() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project)
        .args(["build", "foo"])
        .env("RUSTFLAGS", "  -C debuginfo=1 ")
        .assert()
        .success();

    let src = project.path().join("src/foo/src");
    assert_eq!(
        project.read("bld/foo/cargo-rustflags"),
        format!("-C debuginfo=1 --remap-path-prefix src={}", src.display())
    );
}

/// > Without RUSTFLAGS only the remap flag is passed
#[test]
fn rustflags_without_existing_value() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project).args(["build", "foo"]).assert().success();

    let src = project.path().join("src/foo/src");
    assert_eq!(
        project.read("bld/foo/cargo-rustflags"),
        format!("--remap-path-prefix src={}", src.display())
    );
}

/// > Rebuilding overwrites the installed binary and reuses directories
#[test]
fn rebuild_is_idempotent() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project).args(["build", "foo"]).assert().success();
    dev42_fake(&project)
        .args(["build", "foo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("create dir").not());

    assert!(project.path().join("bin/foo").is_file());
}

// =============================================================================
// FAILED BUILD
// =============================================================================

/// > A failing cargo exit code becomes dev42's exit code
#[test]
fn cargo_exit_code_is_forwarded() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project)
        .args(["build", "foo"])
        .env("FAKE_CARGO_EXIT", "101")
        .assert()
        .code(101)
        .stdout(predicates::str::contains("install").not())
        .stderr(predicates::str::contains("dev42: "));

    assert!(!project.path().join("bin/foo").exists());
}

/// > Success without an artifact is reported and exits 1
#[test]
fn missing_artifact_fails() {
    let project = Project::rust("foo", "foo");

    dev42_fake(&project)
        .args(["build", "foo"])
        .env("FAKE_CARGO_NO_ARTIFACT", "1")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("built binary not found"));
}

/// > A manifest without package.name fails before cargo runs
#[test]
fn manifest_without_name_never_runs_cargo() {
    let project = Project::rust("foo", "foo");
    project.file("src/foo/Cargo.toml", "[package]\nversion = \"0.1.0\"\n");

    dev42_fake(&project)
        .args(["build", "foo"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("missing package.name"));

    assert!(!project.path().join("bld/foo/cargo-args").exists());
}

/// > An unparsable manifest surfaces the parser error
#[test]
fn invalid_manifest_never_runs_cargo() {
    let project = Project::rust("foo", "foo");
    project.file("src/foo/Cargo.toml", "[package\nname = \"foo\"\n");

    let output = dev42_fake(&project).args(["build", "foo"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("dev42: invalid Cargo.toml: "), "{stderr}");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(!project.path().join("bld/foo/cargo-args").exists());
}
