//! Declared parameter types and coerced parameter values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an operation parameter.
///
/// The set is closed: every parameter in the catalog carries exactly one of
/// these types, and configuration values (which always arrive as strings)
/// are coerced against it before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// Free-form string value, accepted verbatim.
    Text,
    /// Boolean value (`true` or `false`, case-insensitive).
    Boolean,
    /// 32-bit signed integer value.
    Integer,
    /// 64-bit signed integer value.
    LongInteger,
}

impl ParameterType {
    /// Attempts to interpret a raw configuration string as this type.
    ///
    /// Returns `None` when the value cannot be represented, leaving the
    /// caller to report a type mismatch with full context.
    #[must_use]
    pub fn coerce(self, raw: &str) -> Option<ParameterValue> {
        match self {
            Self::Text => Some(ParameterValue::Text(raw.to_owned())),
            Self::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(ParameterValue::Boolean(true)),
                "false" => Some(ParameterValue::Boolean(false)),
                _ => None,
            },
            Self::Integer => raw.parse::<i32>().ok().map(ParameterValue::Integer),
            Self::LongInteger => raw.parse::<i64>().ok().map(ParameterValue::Long),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::LongInteger => "long_integer",
        };
        f.write_str(name)
    }
}

/// A parameter value after coercion to its declared type.
///
/// Ready to hand to the dispatch layer; serialises to the natural JSON
/// representation of each variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Verbatim text value.
    Text(String),
    /// Coerced boolean value.
    Boolean(bool),
    /// Coerced 32-bit integer value.
    Integer(i32),
    /// Coerced 64-bit integer value.
    Long(i64),
}

impl ParameterValue {
    /// Returns the declared type this value satisfies.
    #[must_use]
    pub const fn parameter_type(&self) -> ParameterType {
        match self {
            Self::Text(_) => ParameterType::Text,
            Self::Boolean(_) => ParameterType::Boolean,
            Self::Integer(_) => ParameterType::Integer,
            Self::Long(_) => ParameterType::LongInteger,
        }
    }

    /// Returns the text value, if this is a [`ParameterValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a [`ParameterValue::Boolean`].
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer value widened to 64 bits, if this holds either
    /// integer variant.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(i64::from(*value)),
            Self::Long(value) => Some(*value),
            _ => None,
        }
    }
}
