// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cargo build and test invocation.
//!
//! Both operations are linear and fail fast: the first error ends the
//! operation, and directories created before it are left in place.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use termcolor::{StandardStream, WriteColor};

use crate::env::{Environment, names};
use crate::error::{Error, Result};
use crate::manifest::{CargoManifest, require_manifest};
use crate::process::{Invocation, ProcessRunner};
use crate::status::StatusLog;
use crate::workspace::PackageContext;

/// Cargo profile directory the artifact is read from.
const PROFILE_DIR: &str = "debug";

/// Builds, tests and installs Rust packages through cargo.
pub struct Toolchain<R, W = StandardStream> {
    runner: R,
    env: Environment,
    program: OsString,
    log: StatusLog<W>,
}

impl<R: ProcessRunner, W: WriteColor> Toolchain<R, W> {
    /// Create a toolchain over an environment snapshot.
    ///
    /// `CARGO` in the snapshot selects the cargo executable.
    pub fn new(runner: R, env: Environment, log: StatusLog<W>) -> Self {
        let program = env
            .get(names::CARGO)
            .filter(|p| !p.is_empty())
            .map(|p| p.to_os_string())
            .unwrap_or_else(|| OsString::from("cargo"));
        Self {
            runner,
            env,
            program,
            log,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn log(&self) -> &StatusLog<W> {
        &self.log
    }

    /// Build the package and install its binary into the bin directory.
    ///
    /// Returns the installed path.
    pub fn build(&mut self, ctx: &PackageContext) -> Result<PathBuf> {
        self.ensure_dir(&ctx.build_dir)?;
        self.ensure_dir(&ctx.bin_dir)?;

        let manifest_path = ctx.manifest_path();
        let manifest = CargoManifest::load(&manifest_path)?;
        let bin_name = format!("{}{}", manifest.package_name, std::env::consts::EXE_SUFFIX);

        self.cargo("build", ctx)?;

        let built = ctx.build_dir.join(PROFILE_DIR).join(&bin_name);
        if !built.is_file() {
            return Err(Error::ArtifactNotFound { path: built });
        }

        let dest = ctx.bin_dir.join(&bin_name);
        self.log.install(&built, &dest)?;
        install(&built, &dest)?;
        Ok(dest)
    }

    /// Run the package's tests.
    pub fn test(&mut self, ctx: &PackageContext) -> Result<()> {
        self.ensure_dir(&ctx.build_dir)?;
        require_manifest(&ctx.manifest_path())?;
        self.cargo("test", ctx)
    }

    /// Environment for cargo invocations against `ctx`.
    pub fn child_env(&self, ctx: &PackageContext) -> Environment {
        let mut env = self.env.clone();
        env.set(names::CARGO_TARGET_DIR, ctx.build_dir.as_os_str());
        env.append_flag(names::RUSTFLAGS, &remap_flag(&ctx.package_dir));
        env
    }

    fn cargo(&mut self, subcommand: &str, ctx: &PackageContext) -> Result<()> {
        let invocation = Invocation::new(&self.program, &ctx.repo_root, self.child_env(ctx))
            .arg(subcommand)
            .arg("--manifest-path")
            .arg(ctx.manifest_path());

        self.log.run(&invocation)?;
        let status = self.runner.run(&invocation)?;
        tracing::debug!("{} exited with {:?}", invocation.tool(), status.code);

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::ToolExitedNonZero {
                tool: invocation.tool(),
                code: status.code,
            })
        }
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }
        self.log.create_dir(path)?;
        fs::create_dir_all(path).map_err(|e| io_error(path, e))
    }
}

/// Rustc flag rewriting the package-relative `src` prefix to its full path.
pub fn remap_flag(package_dir: &Path) -> String {
    format!(
        "--remap-path-prefix src={}",
        package_dir.join("src").display()
    )
}

/// Copy `from` to `to`, keeping permissions and modification time.
fn install(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| io_error(to, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(to, fs::Permissions::from_mode(0o755))
            .map_err(|e| io_error(to, e))?;
    }

    let modified = fs::metadata(from)
        .and_then(|m| m.modified())
        .map_err(|e| io_error(from, e))?;
    File::options()
        .write(true)
        .open(to)
        .and_then(|f| f.set_modified(modified))
        .map_err(|e| io_error(to, e))
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "toolchain_tests.rs"]
mod tests;
