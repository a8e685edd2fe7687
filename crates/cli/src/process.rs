// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process invocation.
//!
//! [`ProcessRunner`] is the seam between orchestration and the OS: it runs
//! one command to completion with inherited stdio and reports how it ended.

use std::ffi::OsString;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::env::Environment;
use crate::error::{Error, Result};

/// A fully described child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    /// Complete environment of the child. Nothing else is inherited.
    pub env: Environment,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>, cwd: impl Into<PathBuf>, env: Environment) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program name for diagnostics.
    pub fn tool(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a finished child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code; `None` when the platform reports none.
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code: Some(code) };
        }

        // Shell convention for a child killed by a signal.
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self {
                    code: Some(128 + signal),
                };
            }
        }

        Self { code: None }
    }
}

/// Runs a child process synchronously and waits for it indefinitely.
pub trait ProcessRunner {
    /// Returns the child's status, `ToolNotFound` when the program cannot be
    /// located, or `ToolSpawn` for any other launch failure.
    fn run(&self, invocation: &Invocation) -> Result<RunStatus>;
}

/// Runs processes on the host with inherited stdin, stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.cwd)
            .env_clear()
            .envs(invocation.env.iter());

        tracing::trace!("spawning {:?}", cmd);

        match cmd.status() {
            Ok(status) => Ok(status.into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::ToolNotFound {
                tool: invocation.tool(),
            }),
            Err(e) => Err(Error::ToolSpawn {
                tool: invocation.tool(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
