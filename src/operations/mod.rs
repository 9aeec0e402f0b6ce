//! Container-operation catalog and parameter validation.
//!
//! This module owns the structural contract for describing, looking up, and
//! validating remote container-management operations:
//!
//! - Domain types in [`domain`]: [`domain::OperationDescriptor`],
//!   [`domain::ParameterType`], [`domain::ParameterValue`], and the error
//!   types
//! - The immutable operation table in [`catalog`], built once at process
//!   start and shared read-only
//! - Configuration-time parameter validation in [`validation`]
//!
//! What an operation actually does remotely is the dispatch layer's concern;
//! this module never performs I/O.

pub mod catalog;
pub mod domain;
pub mod validation;

#[cfg(test)]
mod tests;
