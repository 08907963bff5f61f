// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout fsdconv.
//!
//! This module provides the foundational types for the library:
//! - [`FsdError`] - Error taxonomy shared by every component
//! - [`FsdValue`] - Native value graph produced by format loaders

pub mod error;
pub mod value;

pub use error::{FsdError, Result};
pub use value::{FieldValue, FsdValue, MapKey, StructValue};
