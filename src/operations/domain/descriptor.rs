//! Operation descriptors: wire name, capability flags, parameter schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::error::CatalogError;
use super::parameter::ParameterType;

/// Immutable description of one remote operation.
///
/// The `name` is the stable wire identifier callers use to select the
/// operation. The two capability flags tell the dispatch layer how the
/// operation may be invoked: `can_consume` for source semantics (feeding a
/// polling consumer) and `can_produce` for sink / request-response
/// semantics. The parameter schema maps each accepted parameter name to its
/// declared type; a name absent from the schema is not accepted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    name: String,
    can_consume: bool,
    can_produce: bool,
    #[serde(default)]
    parameters: BTreeMap<String, ParameterType>,
}

impl OperationDescriptor {
    /// Creates a descriptor with an empty parameter schema.
    #[must_use]
    pub fn new(name: impl Into<String>, can_consume: bool, can_produce: bool) -> Self {
        Self {
            name: name.into(),
            can_consume,
            can_produce,
            parameters: BTreeMap::new(),
        }
    }

    /// Declares a parameter on this descriptor.
    ///
    /// Intended for the built-in operation table, where schemas are static
    /// data; duplicate declarations are asserted against in debug builds.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, parameter_type: ParameterType) -> Self {
        let replaced = self.parameters.insert(name.into(), parameter_type);
        debug_assert!(
            replaced.is_none(),
            "built-in operation schemas must not declare a parameter twice",
        );
        self
    }

    /// Builds a descriptor from explicit `(name, type)` pairs.
    ///
    /// This is the fallible construction path for schemas assembled from
    /// external data. Pairing name and type in one tuple removes the
    /// odd-arity failure mode of a flattened argument list outright; the
    /// remaining malformation is a repeated parameter name, rejected here
    /// rather than deferred to first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateParameter`] when the same parameter
    /// name appears more than once.
    pub fn from_pairs<N>(
        name: impl Into<String>,
        can_consume: bool,
        can_produce: bool,
        pairs: impl IntoIterator<Item = (N, ParameterType)>,
    ) -> Result<Self, CatalogError>
    where
        N: Into<String>,
    {
        let operation = name.into();
        let mut parameters = BTreeMap::new();
        for (parameter, parameter_type) in pairs {
            let key = parameter.into();
            if parameters.insert(key.clone(), parameter_type).is_some() {
                return Err(CatalogError::DuplicateParameter {
                    operation,
                    parameter: key,
                });
            }
        }
        Ok(Self {
            name: operation,
            can_consume,
            can_produce,
            parameters,
        })
    }

    /// Returns the stable wire name of the operation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the operation can act as a data source.
    #[must_use]
    pub const fn can_consume(&self) -> bool {
        self.can_consume
    }

    /// Returns whether the operation can act as a data sink.
    #[must_use]
    pub const fn can_produce(&self) -> bool {
        self.can_produce
    }

    /// Returns the declared parameter schema.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, ParameterType> {
        &self.parameters
    }

    /// Returns the declared type of a parameter, or `None` when the
    /// parameter is not accepted by this operation.
    #[must_use]
    pub fn parameter_type(&self, parameter: &str) -> Option<ParameterType> {
        self.parameters.get(parameter).copied()
    }

    /// Returns whether the operation accepts a parameter with this name.
    #[must_use]
    pub fn declares(&self, parameter: &str) -> bool {
        self.parameters.contains_key(parameter)
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
