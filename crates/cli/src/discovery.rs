// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository root discovery.
//!
//! Walks from the directory holding the dev42 executable up to the first
//! directory containing `src/`.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::workspace::SOURCE_DIR;

/// Find the repository root starting from `start_dir` and walking up.
///
/// Stops at a `.git` marker or the filesystem root.
pub fn find_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if current.join(SOURCE_DIR).is_dir() {
            return Some(current);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the repository root from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-R`/`--root` (handled by clap with env = "DEV42_ROOT")
/// 2. Discovery upward from the executable's directory
pub fn resolve_root(explicit: Option<&Path>, exe: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return if path.is_dir() {
            Ok(absolute(path))
        } else {
            Err(Error::RootNotFound {
                start: path.to_path_buf(),
            })
        };
    }

    let start = exe.parent().unwrap_or(exe);
    find_root(start).ok_or_else(|| Error::RootNotFound {
        start: start.to_path_buf(),
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
