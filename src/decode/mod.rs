// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Recursive tree decoder.
//!
//! Walks an [`FsdValue`] graph and rewrites it into a JSON-compatible tree
//! ([`serde_json::Value`]), resolving name-identifier integers through the
//! string table on the way.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fsdconv::decode::TreeDecoder;
//! use fsdconv::strings::StringTable;
//! use fsdconv::FsdValue;
//!
//! let table = StringTable::from_texts(vec!["Veldspar".to_string()]);
//! let decoder = TreeDecoder::new(&table);
//!
//! let tree = decoder.decode(Some("typeNameID"), &FsdValue::Int(0))?;
//! assert_eq!(tree, serde_json::json!("Veldspar"));
//! # Ok(())
//! # }
//! ```

use crate::core::{FsdError, FsdValue, Result};
use crate::strings::StringTable;

/// Lower-cased suffix that marks an integer field as a string-table
/// reference.
pub const NAME_ID_SUFFIX: &str = "nameid";

/// Policy for the name-identifier heuristic.
///
/// The source format carries no tag marking an integer as a localized
/// reference; the convention is that any field whose name ends in `NameID`
/// (compared case-insensitively) holds a string-table identifier. Known
/// exceptions are matched with their exact casing, not case-insensitively:
/// `dungeonNameID` holds a dungeon identifier and is exempt, but other
/// casings of the same name still resolve through the table. The exception
/// list is extensible because further such fields may turn up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIdPolicy {
    exceptions: Vec<String>,
}

impl Default for NameIdPolicy {
    fn default() -> Self {
        Self {
            exceptions: vec!["dungeonNameID".to_string()],
        }
    }
}

impl NameIdPolicy {
    /// Policy with no exceptions; every `*NameID` field resolves.
    pub fn without_exceptions() -> Self {
        Self {
            exceptions: Vec::new(),
        }
    }

    /// Add an exact-case exception, returning the policy for chaining.
    pub fn with_exception(mut self, field_name: impl Into<String>) -> Self {
        self.exceptions.push(field_name.into());
        self
    }

    /// The current exception list.
    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    /// Check whether an integer under `field_name` is a string-table
    /// reference.
    pub fn applies_to(&self, field_name: &str) -> bool {
        field_name.to_lowercase().ends_with(NAME_ID_SUFFIX)
            && !self.exceptions.iter().any(|e| e == field_name)
    }
}

/// Recursive type-dispatch decoder over native value graphs.
///
/// A decoder borrows the string table for the whole conversion run and is
/// otherwise stateless: decoding is a pure function of the input graph, so
/// the same graph and table always produce a structurally identical tree.
/// Errors are never caught here; any failure aborts the artifact and
/// propagates to the caller.
#[derive(Debug)]
pub struct TreeDecoder<'a> {
    strings: &'a StringTable,
    policy: NameIdPolicy,
}

impl<'a> TreeDecoder<'a> {
    /// Create a decoder with the default name-identifier policy.
    pub fn new(strings: &'a StringTable) -> Self {
        Self::with_policy(strings, NameIdPolicy::default())
    }

    /// Create a decoder with a custom name-identifier policy.
    pub fn with_policy(strings: &'a StringTable, policy: NameIdPolicy) -> Self {
        Self { strings, policy }
    }

    /// The active name-identifier policy.
    pub fn policy(&self) -> &NameIdPolicy {
        &self.policy
    }

    /// Decode a whole artifact graph (no field-name context at the root).
    pub fn decode_root(&self, value: &FsdValue) -> Result<serde_json::Value> {
        self.decode(None, value)
    }

    /// Decode one value found under `field_name`.
    ///
    /// `field_name` is the name context the value was reached through: a
    /// struct field name or a string mapping key. Sequence and tuple
    /// elements have no name context, which is what keeps the heuristic
    /// from firing inside arrays.
    pub fn decode(
        &self,
        field_name: Option<&str>,
        value: &FsdValue,
    ) -> Result<serde_json::Value> {
        match value {
            FsdValue::Struct(s) => {
                let mut obj = serde_json::Map::new();
                for field in &s.fields {
                    // Reserved names never reach the output.
                    if field.name.starts_with("__") {
                        continue;
                    }
                    obj.insert(
                        field.name.clone(),
                        self.decode(Some(&field.name), &field.value)?,
                    );
                }
                Ok(serde_json::Value::Object(obj))
            }

            FsdValue::Mapping(entries) => {
                let mut obj = serde_json::Map::new();
                for (key, entry) in entries {
                    // Keys are addressing context, not values: they are
                    // stringified, never recursively decoded.
                    obj.insert(key.to_string(), self.decode(key.as_field_name(), entry)?);
                }
                Ok(serde_json::Value::Object(obj))
            }

            FsdValue::Sequence(items) | FsdValue::Tuple(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.decode(None, item)?);
                }
                Ok(serde_json::Value::Array(out))
            }

            // Recognized but unimplemented; a placeholder, not an error.
            FsdValue::BulkVector { .. } => Ok(serde_json::Value::Null),

            FsdValue::Int(v) => {
                if field_name.is_some_and(|name| self.policy.applies_to(name)) {
                    let text = self.strings.lookup(*v)?;
                    Ok(serde_json::Value::String(text.to_string()))
                } else {
                    Ok(serde_json::Value::Number((*v).into()))
                }
            }

            FsdValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .ok_or_else(|| FsdError::unrepresentable_float(*v)),

            FsdValue::String(s) => Ok(serde_json::Value::String(s.clone())),

            FsdValue::Unknown { type_tag } => Err(FsdError::unsupported_shape(type_tag.clone())),
        }
    }
}
