//! Error types for catalog construction and parameter validation.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Catalog
//! errors occur only while the static operation table is being built and are
//! fatal at startup; validation errors describe a single bad invocation and
//! are reported back to the caller, never to the process.

use super::parameter::ParameterType;
use thiserror::Error;

/// Errors raised while constructing an operation catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two descriptors were registered under the same operation name.
    #[error("duplicate operation '{0}' in catalog")]
    DuplicateOperation(String),

    /// An operation declared the same parameter name twice.
    #[error("duplicate parameter '{parameter}' declared for operation '{operation}'")]
    DuplicateParameter {
        /// Operation whose schema is malformed.
        operation: String,
        /// The repeated parameter name.
        parameter: String,
    },
}

/// Errors raised while resolving an operation or validating supplied
/// parameters against its schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No operation with the requested name exists in the catalog.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// A supplied parameter is not declared by the operation's schema.
    #[error("unknown parameter '{parameter}' for operation '{operation}'")]
    UnknownParameter {
        /// Operation being invoked.
        operation: String,
        /// The undeclared parameter name.
        parameter: String,
    },

    /// A supplied value cannot be interpreted as the declared type.
    #[error(
        "invalid value '{value}' for parameter '{parameter}' of operation '{operation}': expected {expected}"
    )]
    TypeMismatch {
        /// Operation being invoked.
        operation: String,
        /// Parameter whose value is malformed.
        parameter: String,
        /// The type declared by the schema.
        expected: ParameterType,
        /// The offending raw value.
        value: String,
    },

    /// Multiple validation violations occurred in one invocation.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines collected violations into a single error.
    ///
    /// A single violation is returned directly rather than wrapped, so
    /// callers matching on one bad parameter see the specific variant.
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        debug_assert!(
            !errors.is_empty(),
            "multiple() called with an empty violation list"
        );
        if errors.len() == 1 {
            if let Some(error) = errors.pop() {
                return error;
            }
        }
        Self::Multiple(errors)
    }

    /// Returns `true` if this error carries more than one violation.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual violations.
    ///
    /// A single violation is treated as a list of one, so reporting layers
    /// can render every problem in one pass without matching on
    /// [`ValidationError::Multiple`] themselves.
    #[must_use]
    pub fn violations(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().collect(),
            single => vec![single],
        }
    }
}
