// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show string tables and artifact shape summaries.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Subcommand;

use crate::common::Result;
use fsdconv::loader::global_registry;
use fsdconv::{FsdValue, StringTable};

/// Inspect conversion inputs.
#[derive(Subcommand, Clone, Debug)]
pub enum InspectCmd {
    /// Show string table summary, optionally looking up an identifier
    Strings {
        /// Localization table JSON export
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Identifier to look up
        #[arg(long)]
        id: Option<i64>,
    },

    /// Summarize the native shapes in an artifact
    Shapes {
        /// Input artifact
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        match self {
            InspectCmd::Strings { input, id } => cmd_strings(input, id),
            InspectCmd::Shapes { input } => cmd_shapes(input),
        }
    }
}

/// Cmd: Show string table info.
fn cmd_strings(input: PathBuf, id: Option<i64>) -> Result<()> {
    let table = StringTable::load(&input)?;

    println!("=== {} ===", input.display());
    println!("Records: {}", table.len());

    if let Some(id) = id {
        println!("[{}] {}", id, table.lookup(id)?);
    }

    Ok(())
}

/// Cmd: Summarize artifact shapes.
fn cmd_shapes(input: PathBuf) -> Result<()> {
    let extension = input
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let loader = global_registry().get(extension)?;
    let graph = loader.load(&input)?;

    let mut counts = BTreeMap::new();
    let mut max_depth = 0;
    tally(&graph, 1, &mut counts, &mut max_depth);

    println!("=== {} ===", input.display());
    println!("Format: {}", loader.format_name());
    println!("Root: {}", graph.type_tag());
    println!("Max depth: {max_depth}");
    println!();
    println!("Shapes:");
    for (tag, count) in &counts {
        println!("  {tag}: {count}");
    }

    Ok(())
}

/// Count every node in the graph by type tag and track the deepest path.
fn tally(
    value: &FsdValue,
    depth: usize,
    counts: &mut BTreeMap<String, usize>,
    max_depth: &mut usize,
) {
    *counts.entry(value.type_tag().to_string()).or_insert(0) += 1;
    *max_depth = (*max_depth).max(depth);

    match value {
        FsdValue::Struct(s) => {
            for field in &s.fields {
                tally(&field.value, depth + 1, counts, max_depth);
            }
        }
        FsdValue::Mapping(entries) => {
            for (_, entry) in entries {
                tally(entry, depth + 1, counts, max_depth);
            }
        }
        FsdValue::Sequence(items) | FsdValue::Tuple(items) => {
            for item in items {
                tally(item, depth + 1, counts, max_depth);
            }
        }
        FsdValue::BulkVector { .. }
        | FsdValue::Int(_)
        | FsdValue::Float(_)
        | FsdValue::String(_)
        | FsdValue::Unknown { .. } => {}
    }
}
