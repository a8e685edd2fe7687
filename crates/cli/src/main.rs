// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dev42 CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dev42::cli::{Cli, Command};
use dev42::color::resolve_color;
use dev42::env::names;
use dev42::error::ExitCode;
use dev42::{Dispatcher, Environment, StatusLog, SystemRunner, Toolchain, Workspace, discovery};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::DEV42_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dev42: {}", e);
            match e.downcast_ref::<dev42::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failure,
            }
        }
    };

    std::process::exit(exit_code.code());
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let exe = std::env::current_exe()?;
    let root = discovery::resolve_root(cli.root.as_deref(), &exe)?;
    tracing::debug!("repository root: {}", root.display());

    let toolchain = Toolchain::new(
        SystemRunner,
        Environment::from_process(),
        StatusLog::stdout(resolve_color()),
    );
    let mut dispatcher = Dispatcher::new(Workspace::new(root), toolchain);

    match &cli.command {
        Command::Build(args) => {
            dispatcher.build(&args.package)?;
        }
        Command::Test(args) => dispatcher.test(&args.package)?,
    }

    Ok(ExitCode::Success)
}
