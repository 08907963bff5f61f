// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - turn binary artifacts into localized JSON.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Subcommand;

use crate::common::{ProgressBar, Result};
use fsdconv::loader::global_registry;
use fsdconv::{BatchConverter, ConvertOptions, NameIdPolicy, StringTable};

/// Convert artifacts into localized JSON.
#[derive(Subcommand, Clone, Debug)]
pub enum ConvertCmd {
    /// Convert every artifact in a directory
    Dir {
        /// Input directory of binary artifacts
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory for JSON files
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Localization table JSON export
        #[arg(short, long, value_name = "FILE")]
        strings: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Extra exact-case field names exempt from NameID resolution
        #[arg(long, value_name = "FIELD")]
        exempt: Vec<String>,
    },

    /// Convert a single artifact
    File {
        /// Input artifact
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Localization table JSON export
        #[arg(short, long, value_name = "FILE")]
        strings: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Extra exact-case field names exempt from NameID resolution
        #[arg(long, value_name = "FIELD")]
        exempt: Vec<String>,
    },
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        match self {
            ConvertCmd::Dir {
                input,
                output,
                strings,
                compact,
                exempt,
            } => cmd_dir(input, output, strings, compact, exempt),
            ConvertCmd::File {
                input,
                output,
                strings,
                compact,
                exempt,
            } => cmd_file(input, output, strings, compact, exempt),
        }
    }
}

fn options(compact: bool, exempt: Vec<String>) -> ConvertOptions {
    let policy = exempt
        .into_iter()
        .fold(NameIdPolicy::default(), |policy, field| {
            policy.with_exception(field)
        });
    ConvertOptions {
        pretty: !compact,
        policy,
    }
}

/// Cmd: Convert a directory of artifacts.
fn cmd_dir(
    input: PathBuf,
    output: PathBuf,
    strings: PathBuf,
    compact: bool,
    exempt: Vec<String>,
) -> Result<()> {
    let table = StringTable::load(&strings)?;
    println!("Loaded {} localization strings", table.len());

    let converter = BatchConverter::with_options(global_registry(), &table, options(compact, exempt));

    let mut artifacts = converter.discover(&input)?;
    artifacts.sort();
    std::fs::create_dir_all(&output)?;

    let pb = ProgressBar::new(artifacts.len() as u64, "convert");
    let mut converted = 0usize;
    let mut failed = 0usize;

    for artifact in &artifacts {
        let stem = artifact
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("artifact");
        let target = output.join(format!("{stem}.json"));

        match converter.convert_file(artifact, &target) {
            Ok(()) => {
                println!("Converted '{}' -> '{}'", artifact.display(), target.display());
                converted += 1;
            }
            Err(e) => {
                eprintln!("Error processing '{}': {e}", artifact.display());
                failed += 1;
            }
        }
        pb.inc();
    }

    pb.finish_with_message(format!("{converted} converted, {failed} failed"));
    println!("Done: {converted} converted, {failed} failed");
    Ok(())
}

/// Cmd: Convert one artifact.
fn cmd_file(
    input: PathBuf,
    output: PathBuf,
    strings: PathBuf,
    compact: bool,
    exempt: Vec<String>,
) -> Result<()> {
    let table = StringTable::load(&strings)?;
    println!("Loaded {} localization strings", table.len());

    let converter = BatchConverter::with_options(global_registry(), &table, options(compact, exempt));
    converter.convert_file(&input, &output)?;

    println!("Converted '{}' -> '{}'", input.display(), output.display());
    Ok(())
}
