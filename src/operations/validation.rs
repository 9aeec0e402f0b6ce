//! Configuration-time validation of supplied operation parameters.
//!
//! Validation is pure and synchronous: it checks a caller-supplied mapping
//! of raw string parameters against a descriptor's schema, coerces each
//! value to its declared type, and performs no I/O. Violations are
//! collected rather than reported fail-fast, so one pass over a bad
//! invocation surfaces every problem it has.

use std::collections::BTreeMap;

use super::catalog::OperationCatalog;
use super::domain::{OperationDescriptor, ParameterValue, ValidationError};

/// Validates a supplied parameter mapping against a descriptor's schema.
///
/// Every declared parameter is optional, so an empty mapping always
/// validates. On success the returned mapping holds exactly the supplied
/// keys, coerced to their declared types and ready for the dispatch layer.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownParameter`] for each key the schema
/// does not declare and [`ValidationError::TypeMismatch`] for each value
/// that cannot be coerced. Two or more violations are wrapped in
/// [`ValidationError::Multiple`].
pub fn validate_parameters(
    descriptor: &OperationDescriptor,
    supplied: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, ParameterValue>, ValidationError> {
    let mut coerced = BTreeMap::new();
    let mut violations = Vec::new();

    for (parameter, raw) in supplied {
        match descriptor.parameter_type(parameter) {
            None => violations.push(ValidationError::UnknownParameter {
                operation: descriptor.name().to_owned(),
                parameter: parameter.clone(),
            }),
            Some(expected) => match expected.coerce(raw) {
                Some(value) => {
                    coerced.insert(parameter.clone(), value);
                }
                None => violations.push(ValidationError::TypeMismatch {
                    operation: descriptor.name().to_owned(),
                    parameter: parameter.clone(),
                    expected,
                    value: raw.clone(),
                }),
            },
        }
    }

    if violations.is_empty() {
        Ok(coerced)
    } else {
        Err(ValidationError::multiple(violations))
    }
}

/// An operation resolved and validated, ready to dispatch.
///
/// Borrows the descriptor so the dispatch layer can read the capability
/// flags, and owns the coerced parameter mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInvocation<'a> {
    descriptor: &'a OperationDescriptor,
    parameters: BTreeMap<String, ParameterValue>,
}

impl<'a> PreparedInvocation<'a> {
    /// Returns the descriptor of the resolved operation.
    #[must_use]
    pub const fn descriptor(&self) -> &'a OperationDescriptor {
        self.descriptor
    }

    /// Returns the validated, type-coerced parameters.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, ParameterValue> {
        &self.parameters
    }

    /// Consumes the invocation, yielding the coerced parameters.
    #[must_use]
    pub fn into_parameters(self) -> BTreeMap<String, ParameterValue> {
        self.parameters
    }
}

/// Resolves an operation by name and validates the supplied parameters in
/// one step.
///
/// This packages the usual configuration-time flow: look the operation up,
/// validate the mapping, and hand descriptor plus coerced parameters to the
/// dispatch layer.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownOperation`] when no operation with the
/// requested name exists, otherwise any error of [`validate_parameters`].
pub fn prepare<'a>(
    catalog: &'a OperationCatalog,
    operation: &str,
    supplied: &BTreeMap<String, String>,
) -> Result<PreparedInvocation<'a>, ValidationError> {
    let descriptor = catalog
        .find(operation)
        .ok_or_else(|| ValidationError::UnknownOperation(operation.to_owned()))?;
    let parameters = validate_parameters(descriptor, supplied)?;
    Ok(PreparedInvocation {
        descriptor,
        parameters,
    })
}
