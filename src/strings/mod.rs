// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Localization string table.
//!
//! An ordered sequence of localization records; the identifier of a record
//! is its position. Loaded once per conversion run, before any decoding,
//! and read-only afterwards, so decoders may share it by reference.

use std::fs;
use std::path::Path;

use crate::core::{FsdError, Result};

/// Ordered ID-to-text lookup for localized names.
///
/// Each record in the source export is a sequence whose first element is the
/// display string; the remaining elements are metadata this component does
/// not interpret. Only the display strings are retained.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    texts: Vec<String>,
}

impl StringTable {
    /// Build a table directly from display strings.
    ///
    /// Record `i` of the resulting table is `texts[i]`.
    pub fn from_texts(texts: Vec<String>) -> Self {
        Self { texts }
    }

    /// Load a table from the JSON export of the localization data.
    ///
    /// The export is an array of records; each record is an array whose
    /// first element is the display string.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        Self::from_json_slice(&data)
    }

    /// Parse a table from JSON bytes (same layout as [`StringTable::load`]).
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let records: Vec<serde_json::Value> = serde_json::from_slice(data)
            .map_err(|e| FsdError::parse("strings", format!("{e}")))?;

        let mut texts = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let fields = record.as_array().ok_or_else(|| {
                FsdError::parse("strings", format!("record {index} is not an array"))
            })?;
            let text = fields
                .first()
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    FsdError::parse(
                        "strings",
                        format!("record {index} has no leading display string"),
                    )
                })?;
            texts.push(text.to_string());
        }

        Ok(Self { texts })
    }

    /// Look up the display string for an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FsdError::StringIdOutOfRange`] if `id` is negative or at or
    /// beyond the table length.
    pub fn lookup(&self, id: i64) -> Result<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.texts.get(index))
            .map(String::as_str)
            .ok_or_else(|| FsdError::string_id_out_of_range(id, self.texts.len()))
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Check whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
