//! The immutable operation catalog.
//!
//! The catalog is the closed, statically known set of operation
//! descriptors. It is built once, is never mutated afterwards, and exposes
//! exact-match lookup plus the read accessors the documentation generator
//! needs. Because no field changes post-construction, the process-wide
//! instance is shared across threads without any locking.

mod builtin;
pub mod params;

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::operations::domain::{CatalogError, OperationDescriptor};

/// Process-wide catalog of the built-in operations, initialised on first
/// access and read-only thereafter.
static BUILT_IN: LazyLock<OperationCatalog> = LazyLock::new(OperationCatalog::new);

/// Immutable, name-keyed set of operation descriptors.
///
/// Serialises transparently as a map from operation name to descriptor, so
/// a generated reference document is rendered from exactly the data that
/// drives validation.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct OperationCatalog {
    operations: BTreeMap<String, OperationDescriptor>,
}

impl OperationCatalog {
    /// Creates a catalog holding the built-in operation table.
    #[must_use]
    pub fn new() -> Self {
        let mut operations = BTreeMap::new();
        for descriptor in builtin::builtin_operations() {
            let replaced = operations.insert(descriptor.name().to_owned(), descriptor);
            debug_assert!(
                replaced.is_none(),
                "built-in operation names must be unique",
            );
        }
        Self { operations }
    }

    /// Creates a catalog from caller-supplied descriptors.
    ///
    /// This is the registration path for catalogs assembled from external
    /// data; after construction the catalog is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateOperation`] when two descriptors
    /// share a name. Registration never overwrites silently.
    pub fn with_operations(
        descriptors: impl IntoIterator<Item = OperationDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut operations = BTreeMap::new();
        for descriptor in descriptors {
            let name = descriptor.name().to_owned();
            if operations.insert(name.clone(), descriptor).is_some() {
                return Err(CatalogError::DuplicateOperation(name));
            }
        }
        Ok(Self { operations })
    }

    /// Returns the process-wide built-in catalog.
    ///
    /// Built once at first use and never mutated, so unsynchronised reads
    /// from any number of threads are safe.
    #[must_use]
    pub fn global() -> &'static Self {
        &BUILT_IN
    }

    /// Looks up an operation by its exact, case-sensitive wire name.
    ///
    /// Returns `None` for unknown names rather than an error, leaving the
    /// caller to report the offending name in its own terms.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Returns all registered operation names, sorted.
    ///
    /// Used by documentation and help generation; the list always reflects
    /// the catalog exactly.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Iterates over all descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }

    /// Returns the number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::new()
    }
}
