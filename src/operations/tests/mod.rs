//! Unit tests for the operations module.
//!
//! Tests are organised by concept: descriptor construction and coercion,
//! catalog lookup, and parameter validation.

mod catalog_tests;
mod descriptor_tests;
