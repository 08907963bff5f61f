// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Batch conversion driver.
//!
//! Walks a directory of binary artifacts, resolves a loader for each from
//! the registry, decodes the graph against the string table, and writes
//! pretty-printed JSON. Formatting and file placement live here, never in
//! the decoder.
//!
//! The core/driver error split: the decoder fails fast and the driver
//! tolerates. A malformed or unsupported artifact is logged and counted,
//! and the batch moves on to the next file.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::{FsdError, Result};
use crate::decode::{NameIdPolicy, TreeDecoder};
use crate::loader::LoaderRegistry;
use crate::strings::StringTable;

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Pretty-print the JSON output (the original exports are indented).
    pub pretty: bool,
    /// Name-identifier policy handed to every decoder.
    pub policy: NameIdPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            policy: NameIdPolicy::default(),
        }
    }
}

/// Counts from a directory conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Artifacts converted and written.
    pub converted: usize,
    /// Artifacts that failed and were skipped.
    pub failed: usize,
}

impl ConvertStats {
    /// Total artifacts considered.
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// Directory-level converter over registered format loaders.
pub struct BatchConverter<'a> {
    registry: &'a LoaderRegistry,
    strings: &'a StringTable,
    options: ConvertOptions,
}

impl<'a> BatchConverter<'a> {
    /// Create a converter with default options.
    pub fn new(registry: &'a LoaderRegistry, strings: &'a StringTable) -> Self {
        Self::with_options(registry, strings, ConvertOptions::default())
    }

    /// Create a converter with explicit options.
    pub fn with_options(
        registry: &'a LoaderRegistry,
        strings: &'a StringTable,
        options: ConvertOptions,
    ) -> Self {
        Self {
            registry,
            strings,
            options,
        }
    }

    /// Load and decode one artifact into a JSON tree without writing it.
    pub fn decode_artifact(&self, input: &Path) -> Result<serde_json::Value> {
        let extension = input
            .extension()
            .and_then(OsStr::to_str)
            .ok_or_else(|| FsdError::unknown_loader(""))?;
        let loader = self.registry.get(extension)?;

        debug!(
            path = %input.display(),
            format = loader.format_name(),
            "loading artifact"
        );
        let graph = loader.load(input)?;

        let decoder = TreeDecoder::with_policy(self.strings, self.options.policy.clone());
        decoder.decode_root(&graph)
    }

    /// Convert one artifact and write the JSON tree to `output`.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let tree = self.decode_artifact(input)?;

        let file = fs::File::create(output)?;
        let mut writer = std::io::BufWriter::new(file);
        if self.options.pretty {
            serde_json::to_writer_pretty(&mut writer, &tree)
        } else {
            serde_json::to_writer(&mut writer, &tree)
        }
        .map_err(|e| FsdError::parse("json encode", format!("{e}")))?;
        writer.flush()?;

        Ok(())
    }

    /// Convert every artifact with a registered loader under `input_dir`.
    ///
    /// The output directory is created if missing. Each converted artifact
    /// lands as `<stem>.json`; files without a registered extension are
    /// skipped silently, failing artifacts are logged and counted but never
    /// halt the batch.
    pub fn convert_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<ConvertStats> {
        fs::create_dir_all(output_dir)?;

        let mut artifacts = self.discover(input_dir)?;
        artifacts.sort();

        let mut stats = ConvertStats::default();
        for input in artifacts {
            let stem = input
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or("artifact");
            let output = output_dir.join(format!("{stem}.json"));

            match self.convert_file(&input, &output) {
                Ok(()) => {
                    info!(
                        input = %input.display(),
                        output = %output.display(),
                        "converted artifact"
                    );
                    stats.converted += 1;
                }
                Err(e) => {
                    warn!(
                        input = %input.display(),
                        error = %e,
                        "artifact conversion failed, continuing with next"
                    );
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    /// List the artifacts under `input_dir` that a registered loader claims.
    pub fn discover(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut artifacts = Vec::new();
        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            match path.extension().and_then(OsStr::to_str) {
                Some(ext) if self.registry.has_extension(ext) => artifacts.push(path),
                _ => debug!(path = %path.display(), "no loader for file, skipping"),
            }
        }
        Ok(artifacts)
    }
}
