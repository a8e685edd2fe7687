// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names and child process environments.
//!
//! The process environment is read once into an [`Environment`] snapshot.
//! Each toolchain invocation clones the snapshot and edits the clone, so the
//! real process environment is never mutated.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Generated environment variable name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// An owned set of environment variables handed to a child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        std::env::vars_os().collect()
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Append a space-separated flag to `key`, keeping any existing value.
    ///
    /// The flag is skipped when the existing value already carries it as a
    /// whole token sequence.
    pub fn append_flag(&mut self, key: &str, flag: &str) {
        let value = match self.get(key) {
            None => OsString::from(flag.trim()),
            Some(existing) => match existing.to_str() {
                Some(existing) => OsString::from(join_flags(existing, flag)),
                None => {
                    let mut value = existing.to_os_string();
                    value.push(" ");
                    value.push(flag.trim());
                    value
                }
            },
        };
        self.set(key, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Join `flag` onto `existing` with a single space, trimming the ends.
pub fn join_flags(existing: &str, flag: &str) -> String {
    let existing = existing.trim();
    let flag = flag.trim();
    if contains_flag(existing, flag) {
        return existing.to_string();
    }
    format!("{existing} {flag}").trim().to_string()
}

fn contains_flag(existing: &str, flag: &str) -> bool {
    let have: Vec<&str> = existing.split_whitespace().collect();
    let want: Vec<&str> = flag.split_whitespace().collect();
    !want.is_empty() && have.windows(want.len()).any(|w| w == want.as_slice())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
