// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build and test the packages under src/ and install their binaries into bin/
#[derive(Parser)]
#[command(name = "dev42")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root (default: found upward from the dev42 executable)
    #[arg(
        short = 'R',
        long = "root",
        global = true,
        env = "DEV42_ROOT",
        value_name = "DIR"
    )]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a package and install its binary into bin/
    Build(PackageArgs),
    /// Run a package's tests
    Test(PackageArgs),
}

#[derive(clap::Args)]
pub struct PackageArgs {
    /// Package name (subdirectory under src/)
    pub package: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
