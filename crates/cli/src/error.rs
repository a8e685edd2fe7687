// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.

use std::path::PathBuf;

/// dev42 error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository root could not be located
    #[error("repository root not found (searched upward from {})", .start.display())]
    RootNotFound { start: PathBuf },

    /// Package directory does not exist under the source root
    #[error("package dir not found: {}", .path.display())]
    PackageDirNotFound { path: PathBuf },

    /// Build descriptor is absent
    #[error("build spec not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Build descriptor is not valid TOML
    #[error("invalid build spec: {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Descriptor declares a package type with no toolchain
    #[error("unsupported package type: {value}")]
    UnsupportedPackageType { value: String },

    /// Cargo.toml is absent
    #[error("Cargo.toml not found: {}", .path.display())]
    ManifestMissing { path: PathBuf },

    /// Cargo.toml is not valid TOML
    #[error("invalid Cargo.toml: {}: {message}", .path.display())]
    ManifestInvalid { path: PathBuf, message: String },

    /// Cargo.toml has no usable `package.name`
    #[error("invalid Cargo.toml: missing package.name in {}", .path.display())]
    MissingPackageName { path: PathBuf },

    /// Toolchain executable could not be located
    #[error("command not found: {tool}")]
    ToolNotFound { tool: String },

    /// Toolchain executable was found but could not be started
    #[error("failed to run {tool}: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Toolchain ran and reported failure
    #[error("{tool} failed ({})", describe_status(*.code))]
    ToolExitedNonZero { tool: String, code: Option<i32> },

    /// Toolchain succeeded but the expected binary is missing
    #[error("built binary not found: {}", .path.display())]
    ArtifactNotFound { path: PathBuf },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing status output failed
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Collapse a multi-line parser message into one diagnostic line.
pub(crate) fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(": ")
}

/// Result type using dev42 Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit status of a dev42 invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Operation completed
    Success,
    /// Any failure originating in dev42 itself
    Failure,
    /// Exit code forwarded from the toolchain process
    Tool(i32),
}

impl ExitCode {
    /// Numeric code handed to `std::process::exit`.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
            ExitCode::Tool(code) => code,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ToolExitedNonZero {
                code: Some(code), ..
            } if *code != 0 => ExitCode::Tool(*code),
            _ => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
