// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Snapshot loader.
//!
//! Reads `.fsdsnap` files: serde-serialized [`FsdValue`] graphs dumped by
//! an exporter that has already run a native binary loader. This is the
//! built-in reference implementation of [`FormatLoader`]; real binary
//! loaders plug in beside it without the rest of the crate noticing.

use std::fs;
use std::path::Path;

use super::FormatLoader;
use crate::core::{FsdError, FsdValue, Result};

/// Loader for serialized native value graphs.
#[derive(Debug)]
pub struct SnapshotLoader {
    _private: (),
}

impl SnapshotLoader {
    /// Create a new snapshot loader.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Parse a snapshot from raw bytes.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<FsdValue> {
        serde_json::from_slice(data).map_err(|e| FsdError::parse("snapshot", format!("{e}")))
    }

    /// Serialize a value graph into snapshot bytes.
    ///
    /// Counterpart of [`SnapshotLoader::decode_bytes`]; exporters and tests
    /// use it to produce fixture artifacts.
    pub fn encode(&self, value: &FsdValue) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| FsdError::parse("snapshot encode", format!("{e}")))
    }
}

impl Default for SnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatLoader for SnapshotLoader {
    fn load(&self, path: &Path) -> Result<FsdValue> {
        let data = fs::read(path)?;
        self.decode_bytes(&data)
    }

    fn extension(&self) -> &str {
        "fsdsnap"
    }

    fn format_name(&self) -> &str {
        "fsd snapshot"
    }
}
