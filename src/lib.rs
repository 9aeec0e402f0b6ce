//! Stevedore: operation catalog and parameter validation for a
//! container-management integration.
//!
//! The crate holds a fixed, self-describing catalog of remote operations
//! (pulling images, stopping containers, and so on). Each operation declares
//! its capability flags and a typed parameter schema, and the same descriptor
//! data drives both configuration-time validation and generated reference
//! documentation, so there is no hand-maintained duplicate list to drift.
//!
//! # Architecture
//!
//! The single bounded context lives in [`operations`]:
//!
//! - **Domain**: pure descriptor and parameter types with no infrastructure
//!   dependencies
//! - **Catalog**: the immutable, process-wide operation table with name-based
//!   lookup
//! - **Validation**: pure checking of caller-supplied parameter mappings
//!   against a descriptor's schema
//!
//! Transport, routing, and configuration parsing are deliberately outside
//! this crate; callers hand a validated, type-coerced parameter mapping to
//! whatever dispatch layer they own.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use stevedore::operations::catalog::OperationCatalog;
//! use stevedore::operations::validation;
//!
//! let catalog = OperationCatalog::global();
//! let supplied = BTreeMap::from([("tag".to_owned(), "latest".to_owned())]);
//!
//! let prepared = validation::prepare(catalog, "imagepull", &supplied)
//!     .expect("imagepull accepts a tag parameter");
//! assert!(prepared.descriptor().can_produce());
//! ```

pub mod operations;
