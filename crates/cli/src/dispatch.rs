// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Package command dispatch.
//!
//! Resolves a package, loads its build descriptor and routes to the
//! toolchain matching the declared type.

use std::path::PathBuf;

use termcolor::WriteColor;

use crate::config::{self, PackageKind};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::toolchain::Toolchain;
use crate::workspace::{PackageContext, Workspace};

/// Routes `build` and `test` requests for packages in one workspace.
pub struct Dispatcher<R, W> {
    workspace: Workspace,
    rust: Toolchain<R, W>,
}

impl<R: ProcessRunner, W: WriteColor> Dispatcher<R, W> {
    pub fn new(workspace: Workspace, rust: Toolchain<R, W>) -> Self {
        Self { workspace, rust }
    }

    pub fn toolchain(&self) -> &Toolchain<R, W> {
        &self.rust
    }

    /// Build `package` and install its binary. Returns the installed path.
    pub fn build(&mut self, package: &str) -> Result<PathBuf> {
        let (ctx, kind) = self.resolve(package)?;
        match kind {
            PackageKind::Rust => self.rust.build(&ctx),
        }
    }

    /// Run the tests of `package`.
    pub fn test(&mut self, package: &str) -> Result<()> {
        let (ctx, kind) = self.resolve(package)?;
        match kind {
            PackageKind::Rust => self.rust.test(&ctx),
        }
    }

    fn resolve(&self, package: &str) -> Result<(PackageContext, PackageKind)> {
        let ctx = self.workspace.package(package)?;
        let spec = config::load_descriptor(&ctx.descriptor_path())?;
        tracing::debug!(
            "package {} at {} ({})",
            ctx.package,
            ctx.package_dir.display(),
            spec.kind
        );
        Ok((ctx, spec.kind))
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
