// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build descriptor parsing and validation.
//!
//! Handles `tools42_build.toml` parsing with type validation and unknown key warnings.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result, single_line};

/// File name of the per-package build descriptor.
pub const DESCRIPTOR_FILE: &str = "tools42_build.toml";

/// Known top-level keys in the descriptor.
const KNOWN_KEYS: &[&str] = &["type"];

/// Toolchain family a package is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Built and tested with cargo.
    Rust,
}

impl PackageKind {
    /// Parse the descriptor's `type` value.
    ///
    /// Anything other than the string `"rust"` is rejected, including a
    /// missing or non-string value.
    pub fn from_value(value: Option<&toml::Value>) -> Result<Self> {
        match value {
            Some(toml::Value::String(s)) if s == "rust" => Ok(PackageKind::Rust),
            Some(other) => Err(Error::UnsupportedPackageType {
                value: other.to_string(),
            }),
            None => Err(Error::UnsupportedPackageType {
                value: "(none)".to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Rust => "rust",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub kind: PackageKind,
}

/// Read a TOML file into a table.
pub fn read_table(path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    content
        .parse::<toml::Table>()
        .map_err(|e| Error::ConfigParseError {
            path: path.to_path_buf(),
            message: single_line(e.message()),
        })
}

/// Load and validate the descriptor at `path`, warning on unknown keys.
pub fn load_descriptor(path: &Path) -> Result<PackageSpec> {
    let table = read_table(path)?;
    let spec = parse_table(&table)?;

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    tracing::debug!("loaded {} (type = {})", path.display(), spec.kind);
    Ok(spec)
}

/// Parse descriptor content from a string.
pub fn parse(content: &str, path: &Path) -> Result<PackageSpec> {
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| Error::ConfigParseError {
            path: path.to_path_buf(),
            message: single_line(e.message()),
        })?;
    parse_table(&table)
}

fn parse_table(table: &toml::Table) -> Result<PackageSpec> {
    let kind = PackageKind::from_value(table.get("type"))?;
    Ok(PackageSpec { kind })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "dev42: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
