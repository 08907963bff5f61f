// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Fsdconv CLI
//!
//! Command-line tool for converting FSD binary data exports to JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a directory of artifacts
//! fsdconv convert dir data/fsd data/json --strings data/localization_en-us.json
//!
//! # Convert a single artifact
//! fsdconv convert file types.fsdsnap types.json --strings localization_en-us.json
//!
//! # Inspect a string table
//! fsdconv inspect strings localization_en-us.json --id 42
//!
//! # Summarize the shapes in an artifact
//! fsdconv inspect shapes types.fsdsnap
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, InspectCmd};
use common::Result;

/// Fsdconv - FSD static data conversion toolkit
///
/// Turn binary game data exports into localized, pretty-printed JSON
/// through pluggable format loaders.
#[derive(Parser, Clone)]
#[command(name = "fsdconv")]
#[command(about = "FSD static data conversion toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Convert artifacts into localized JSON (dir, file)
    #[command(subcommand)]
    Convert(ConvertCmd),

    /// Inspect string tables and artifacts (strings, shapes)
    #[command(subcommand)]
    Inspect(InspectCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    }
}

fn main() {
    common::init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
