// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status lines written to stdout.
//!
//! Format:
//! ```text
//! create dir: <path>
//! run: <program> <args...>
//! install: <artifact> -> <destination>
//! ```

use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::scheme;
use crate::error::{Error, Result};
use crate::process::Invocation;

/// Status line writer with color support.
pub struct StatusLog<W = StandardStream> {
    out: W,
}

impl StatusLog<StandardStream> {
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> StatusLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn create_dir(&mut self, path: &Path) -> Result<()> {
        self.line("create dir", &scheme::changed(), &path.display().to_string())
    }

    pub fn run(&mut self, invocation: &Invocation) -> Result<()> {
        self.line("run", &scheme::command(), &invocation.to_string())
    }

    pub fn install(&mut self, from: &Path, to: &Path) -> Result<()> {
        let text = format!("{} -> {}", from.display(), to.display());
        self.line("install", &scheme::changed(), &text)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn line(&mut self, label: &str, spec: &ColorSpec, text: &str) -> Result<()> {
        self.write_line(label, spec, text).map_err(Error::Output)
    }

    fn write_line(&mut self, label: &str, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{label}:")?;
        self.out.reset()?;
        writeln!(self.out, " {text}")?;
        // Flush before a child process writes to the same stream.
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
