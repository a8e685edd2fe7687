// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts report failure by panicking.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: disables color output (any value).
pub const NO_COLOR: &str = "NO_COLOR";
/// Environment variable: forces color output (any value).
pub const COLOR: &str = "COLOR";
/// Environment variable: configures tracing log filter.
pub const DEV42_LOG: &str = "DEV42_LOG";
/// Environment variable: repository root override.
pub const DEV42_ROOT: &str = "DEV42_ROOT";
/// Environment variable: path to the cargo executable.
pub const CARGO: &str = "CARGO";
/// Environment variable: cargo build output directory.
pub const CARGO_TARGET_DIR: &str = "CARGO_TARGET_DIR";
/// Environment variable: extra flags passed to every rustc invocation.
pub const RUSTFLAGS: &str = "RUSTFLAGS";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
