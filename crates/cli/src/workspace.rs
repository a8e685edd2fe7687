// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository layout.
//!
//! ```text
//! <root>/
//!   src/<package>/tools42_build.toml
//!   src/<package>/Cargo.toml
//!   bld/<package>/        per-package CARGO_TARGET_DIR
//!   bin/                  installed binaries
//! ```

use std::path::{Component, Path, PathBuf};

use crate::config::DESCRIPTOR_FILE;
use crate::error::{Error, Result};
use crate::manifest::MANIFEST_FILE;

/// Directory holding one subdirectory per package.
pub const SOURCE_DIR: &str = "src";
/// Directory holding per-package build output.
pub const BUILD_DIR: &str = "bld";
/// Directory receiving installed binaries.
pub const BIN_DIR: &str = "bin";

/// A repository root and the paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    /// Resolve `package` to its directory under `src/`.
    ///
    /// Only a single plain path component names a package; anything else,
    /// or a directory that does not exist, is `PackageDirNotFound`.
    pub fn package(&self, package: &str) -> Result<PackageContext> {
        let package_dir = self.source_dir().join(package);
        if !is_plain_name(package) || !package_dir.is_dir() {
            return Err(Error::PackageDirNotFound { path: package_dir });
        }

        Ok(PackageContext {
            repo_root: self.root.clone(),
            package: package.to_string(),
            build_dir: self.root.join(BUILD_DIR).join(package),
            bin_dir: self.bin_dir(),
            package_dir,
        })
    }
}

fn is_plain_name(package: &str) -> bool {
    let mut components = Path::new(package).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == package
    )
}

/// Paths for one invocation against one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageContext {
    pub repo_root: PathBuf,
    pub package: String,
    pub package_dir: PathBuf,
    pub build_dir: PathBuf,
    pub bin_dir: PathBuf,
}

impl PackageContext {
    pub fn descriptor_path(&self) -> PathBuf {
        self.package_dir.join(DESCRIPTOR_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.package_dir.join(MANIFEST_FILE)
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
