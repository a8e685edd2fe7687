// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cargo manifest reading.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result, single_line};

/// File name of the toolchain manifest inside a package directory.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Only the parts of Cargo.toml that dev42 reads.
#[derive(Deserialize)]
struct RawManifest {
    package: Option<toml::Value>,
}

/// Cargo manifest of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoManifest {
    /// `package.name`, also the name of the default binary target.
    pub package_name: String,
}

impl CargoManifest {
    /// Load the manifest at `path`, requiring a non-empty `package.name`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ManifestMissing {
                path: path.to_path_buf(),
            },
            _ => Error::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest content read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(content).map_err(|e| Error::ManifestInvalid {
            path: path.to_path_buf(),
            message: single_line(e.message()),
        })?;

        let name = raw
            .package
            .as_ref()
            .and_then(|package| package.get("name"))
            .and_then(|name| name.as_str())
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => Ok(Self {
                package_name: name.to_string(),
            }),
            None => Err(Error::MissingPackageName {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Fail with `ManifestMissing` unless the manifest exists.
pub fn require_manifest(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::ManifestMissing {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
