// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Fsdconv
//!
//! Static-data conversion toolkit for FSD binary game data exports.
//!
//! This library turns the value graphs produced by format-specific binary
//! loaders into uniform, JSON-compatible trees, resolving name-identifier
//! integers into localized text along the way. It is organized by concern:
//! - `core/` - the native value graph ([`FsdValue`]) and error taxonomy
//! - `strings/` - the localization [`StringTable`](strings::StringTable)
//! - `decode/` - the recursive [`TreeDecoder`](decode::TreeDecoder)
//! - `loader/` - the pluggable [`FormatLoader`](loader::FormatLoader)
//!   boundary, registry, and built-in snapshot loader
//! - `convert/` - the batch driver that ties a directory of artifacts to
//!   pretty-printed JSON output
//!
//! ## Example: Decoding a Graph
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fsdconv::decode::TreeDecoder;
//! use fsdconv::strings::StringTable;
//! use fsdconv::{FsdValue, StructValue};
//!
//! let table = StringTable::from_texts(vec!["Veldspar".to_string()]);
//! let decoder = TreeDecoder::new(&table);
//!
//! let row = FsdValue::Struct(
//!     StructValue::new("Row")
//!         .with_field("typeNameID", FsdValue::Int(0))
//!         .with_field("volume", FsdValue::Float(0.1)),
//! );
//! let tree = decoder.decode_root(&row)?;
//! assert_eq!(tree, serde_json::json!({"typeNameID": "Veldspar", "volume": 0.1}));
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Batch Conversion
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fsdconv::convert::BatchConverter;
//! use fsdconv::loader::global_registry;
//! use fsdconv::strings::StringTable;
//! use std::path::Path;
//!
//! let strings = StringTable::load("data/localization_en-us.json")?;
//! let converter = BatchConverter::new(global_registry(), &strings);
//! let stats = converter.convert_dir(Path::new("data/fsd"), Path::new("data/json"))?;
//! println!("converted {} artifacts", stats.converted);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{FieldValue, FsdError, FsdValue, MapKey, Result, StructValue};

// Localization string table
pub mod strings;

// Recursive tree decoding
pub mod decode;

// Format loader boundary (trait, registry, snapshot loader)
pub mod loader;

// Batch conversion driver
pub mod convert;

// Re-export the working set most callers need
pub use convert::{BatchConverter, ConvertOptions, ConvertStats};
pub use decode::{NameIdPolicy, TreeDecoder};
pub use loader::{FormatLoader, LoaderRegistry, SnapshotLoader};
pub use strings::StringTable;
