// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Loader registry for plugin-based loader selection.
//!
//! This module provides a registry pattern for format loaders, allowing:
//! - Dynamic loader registration
//! - Plugin-based extensibility
//! - Centralized loader resolution by file extension
//!
//! # Example
//!
//! ```
//! use fsdconv::loader::{LoaderRegistry, SnapshotLoader};
//! use std::sync::Arc;
//!
//! let registry = LoaderRegistry::new();
//! registry.register(Arc::new(SnapshotLoader::new()));
//! let loader = registry.get("fsdsnap").unwrap();
//! assert_eq!(loader.format_name(), "fsd snapshot");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{FormatLoader, SnapshotLoader};
use crate::core::{FsdError, Result};

/// Registry of format loaders keyed by file extension.
///
/// This registry allows dynamic registration of loaders and provides a
/// centralized way to resolve the loader for an artifact from its file
/// extension.
#[derive(Default)]
pub struct LoaderRegistry {
    // RwLock for thread-safe access; loaders themselves are shared.
    loaders: RwLock<HashMap<String, Arc<dyn FormatLoader>>>,
}

impl LoaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader under the extension it claims.
    ///
    /// A later registration for the same extension replaces the earlier
    /// one.
    pub fn register(&self, loader: Arc<dyn FormatLoader>) {
        let mut loaders = self.loaders.write().unwrap();
        loaders.insert(loader.extension().to_string(), loader);
    }

    /// Unregister the loader for an extension.
    ///
    /// Returns `true` if a loader was unregistered, `false` if not found.
    pub fn unregister(&self, extension: &str) -> bool {
        let mut loaders = self.loaders.write().unwrap();
        loaders.remove(extension).is_some()
    }

    /// Check if an extension has a registered loader.
    pub fn has_extension(&self, extension: &str) -> bool {
        let loaders = self.loaders.read().unwrap();
        loaders.contains_key(extension)
    }

    /// Resolve the loader for a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`FsdError::UnknownLoader`] if no loader claims the
    /// extension.
    pub fn get(&self, extension: &str) -> Result<Arc<dyn FormatLoader>> {
        let loaders = self.loaders.read().unwrap();
        loaders
            .get(extension)
            .cloned()
            .ok_or_else(|| FsdError::unknown_loader(extension))
    }

    /// Get all registered extensions.
    pub fn registered_extensions(&self) -> Vec<String> {
        let loaders = self.loaders.read().unwrap();
        loaders.keys().cloned().collect()
    }

    /// Get the number of registered loaders.
    pub fn count(&self) -> usize {
        let loaders = self.loaders.read().unwrap();
        loaders.len()
    }
}

/// Global loader registry.
///
/// This is a convenience singleton preloaded with the built-in snapshot
/// loader. For custom loader sets, create a `LoaderRegistry` directly.
static GLOBAL_REGISTRY: std::sync::OnceLock<LoaderRegistry> = std::sync::OnceLock::new();

fn init_global_registry() -> LoaderRegistry {
    let registry = LoaderRegistry::new();
    registry.register(Arc::new(SnapshotLoader::new()));
    registry
}

/// Get the global loader registry.
pub fn global_registry() -> &'static LoaderRegistry {
    GLOBAL_REGISTRY.get_or_init(init_global_registry)
}
