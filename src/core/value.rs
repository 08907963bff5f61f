// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Native value type system.
//!
//! Provides a unified representation for the value graphs produced by FSD
//! format loaders. Every shape a loader may emit has exactly one variant
//! here, so the decoder can match exhaustively. All variants are
//! serde-serializable, which is what the snapshot loader relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value produced by a format loader.
///
/// This enum is the boundary contract between loaders and the tree decoder:
/// loaders parse proprietary binary artifacts into `FsdValue` graphs, and
/// the decoder rewrites those graphs into JSON-compatible trees. The graph
/// is acyclic by construction; loaders never emit back-references.
///
/// # Design Principles
///
/// - **Closed shape set**: one variant per shape, matched exhaustively
/// - **Owned types**: `String` and `Vec` payloads, no borrowed graph data
/// - **Loader-supplied field lists**: structs carry their public fields as
///   an explicit ordered list rather than requiring reflection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FsdValue {
    /// Named record with loader-supplied public fields.
    Struct(StructValue),

    /// Key-value collection; insertion order is not significant.
    Mapping(Vec<(MapKey, FsdValue)>),

    /// Ordered list of values.
    Sequence(Vec<FsdValue>),

    /// Fixed-arity ordered group; immutable in the source format.
    Tuple(Vec<FsdValue>),

    /// Bulk numeric buffer, recognized by tag but never decoded.
    ///
    /// The tag is the native type name (e.g. `"float_vector"`), kept for
    /// diagnostics. The decoder turns this shape into JSON `null`.
    BulkVector {
        /// Native type tag of the buffer.
        type_tag: String,
    },

    /// Integer scalar, covering wide representations of the source format.
    Int(i64),

    /// Floating-point scalar.
    Float(f64),

    /// String scalar (UTF-8).
    String(String),

    /// A shape the producing loader could not classify.
    ///
    /// Loaders conforming to their contract never emit this; if one does,
    /// decoding fails with `UnsupportedShape` carrying the tag.
    Unknown {
        /// Native type tag reported by the loader.
        type_tag: String,
    },
}

/// A struct-shaped value with its public fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    /// Native record type name (e.g. a loader's row type).
    pub type_name: String,
    /// Publicly discoverable fields, in loader declaration order.
    pub fields: Vec<FieldValue>,
}

/// A named field of a [`StructValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Field identifier.
    pub name: String,
    /// Field payload.
    pub value: FsdValue,
}

/// Mapping key, one of the primitive key types the source format uses.
///
/// Keys are addressing context only: they are never recursively decoded,
/// and only string keys participate in the name-identifier heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapKey {
    /// Integer key (row identifiers and similar).
    Int(i64),
    /// String key (field-like names).
    String(String),
}

impl StructValue {
    /// Create an empty struct value with the given type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, returning the struct for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: FsdValue) -> Self {
        self.fields.push(FieldValue {
            name: name.into(),
            value,
        });
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FsdValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

impl MapKey {
    /// The field-name context this key contributes to the heuristic.
    ///
    /// Integer keys carry no name context.
    pub fn as_field_name(&self) -> Option<&str> {
        match self {
            MapKey::Int(_) => None,
            MapKey::String(s) => Some(s),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MapKey {
    fn from(key: i64) -> Self {
        MapKey::Int(key)
    }
}

impl From<&str> for MapKey {
    fn from(key: &str) -> Self {
        MapKey::String(key.to_string())
    }
}

impl FsdValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a container shape (struct, mapping, sequence,
    /// or tuple).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            FsdValue::Struct(_)
                | FsdValue::Mapping(_)
                | FsdValue::Sequence(_)
                | FsdValue::Tuple(_)
        )
    }

    /// Check if this value is a primitive scalar (int, float, or string).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FsdValue::Int(_) | FsdValue::Float(_) | FsdValue::String(_)
        )
    }

    /// Check if this value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, FsdValue::Int(_))
    }

    /// Check if this value is a bulk numeric buffer.
    pub fn is_bulk_vector(&self) -> bool {
        matches!(self, FsdValue::BulkVector { .. })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to get the inner integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FsdValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FsdValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FsdValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner struct.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            FsdValue::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the elements of a sequence or tuple.
    pub fn as_elements(&self) -> Option<&[FsdValue]> {
        match self {
            FsdValue::Sequence(items) | FsdValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the entries of a mapping.
    pub fn as_mapping(&self) -> Option<&[(MapKey, FsdValue)]> {
        match self {
            FsdValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Get the type tag of this value.
    ///
    /// Bulk vectors and unknown shapes report the tag their loader supplied;
    /// every other shape reports a fixed name.
    pub fn type_tag(&self) -> &str {
        match self {
            FsdValue::Struct(_) => "struct",
            FsdValue::Mapping(_) => "mapping",
            FsdValue::Sequence(_) => "sequence",
            FsdValue::Tuple(_) => "tuple",
            FsdValue::BulkVector { type_tag } => type_tag,
            FsdValue::Int(_) => "int",
            FsdValue::Float(_) => "float",
            FsdValue::String(_) => "string",
            FsdValue::Unknown { type_tag } => type_tag,
        }
    }
}

impl fmt::Display for FsdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsdValue::Struct(s) => write!(f, "{}{{{} fields}}", s.type_name, s.fields.len()),
            FsdValue::Mapping(entries) => write!(f, "{{{} entries}}", entries.len()),
            FsdValue::Sequence(items) => write!(f, "[{} elements]", items.len()),
            FsdValue::Tuple(items) => write!(f, "({} elements)", items.len()),
            FsdValue::BulkVector { type_tag } => write!(f, "<{type_tag}>"),
            FsdValue::Int(v) => write!(f, "{v}"),
            FsdValue::Float(v) => write!(f, "{v}"),
            FsdValue::String(v) => write!(f, "\"{v}\""),
            FsdValue::Unknown { type_tag } => write!(f, "<unknown: {type_tag}>"),
        }
    }
}
