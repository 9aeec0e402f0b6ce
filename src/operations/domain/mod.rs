//! Pure domain types for the operation catalog.
//!
//! Everything here is immutable data with no infrastructure dependencies:
//! operation descriptors, the closed set of parameter types, coerced
//! parameter values, and the error types raised at construction and
//! validation time.

mod descriptor;
mod error;
mod parameter;

pub use descriptor::OperationDescriptor;
pub use error::{CatalogError, ValidationError};
pub use parameter::{ParameterType, ParameterValue};
