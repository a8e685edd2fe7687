// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build and test the packages of a tools42 repository.
//!
//! A package is a directory `src/<name>/` holding a `tools42_build.toml`
//! descriptor and a toolchain manifest. `build` compiles it into
//! `bld/<name>/` and installs the binary into `bin/`; `test` runs its tests.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod manifest;
pub mod process;
pub mod status;
pub mod toolchain;
pub mod workspace;

pub use cli::{Cli, Command, PackageArgs};
pub use config::{PackageKind, PackageSpec};
pub use dispatch::Dispatcher;
pub use env::Environment;
pub use error::{Error, ExitCode, Result};
pub use manifest::CargoManifest;
pub use process::{Invocation, ProcessRunner, RunStatus, SystemRunner};
pub use status::StatusLog;
pub use toolchain::Toolchain;
pub use workspace::{PackageContext, Workspace};
