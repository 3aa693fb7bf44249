//! Error types for schema construction and value reinterpretation.

use crate::schema::ConvertedType;

/// Error returned by [`build_schema_tree`](crate::build_schema_tree) when the
/// element sequence does not match its declared child counts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaTreeError {
    /// The sequence has no root element.
    #[error("schema element list is empty")]
    Empty,

    /// The sequence ended while a group still expected children.
    #[error("group '{parent}' declares {expected} children but only {found} were present")]
    MissingElements {
        parent: String,
        expected: usize,
        found: usize,
    },

    /// Elements remain after the root group was closed.
    #[error("schema tree closed after {consumed} of {total} elements")]
    TrailingElements { consumed: usize, total: usize },
}

/// Per-value error returned by the reinterpretation functions.
#[derive(Debug, thiserror::Error)]
pub enum ReinterpretError {
    /// The raw value has a representation the transform cannot accept.
    #[error("unsupported raw value for {converted_type}: {source}")]
    UnsupportedRawValue {
        converted_type: ConvertedType,
        #[source]
        source: ValueTypeError,
    },

    /// The field descriptor does not describe a reinterpretable column.
    #[error("no reinterpretation defined for {converted_type}")]
    UnsupportedField { converted_type: ConvertedType },

    /// The decimal string produced from a byte array is not a valid float.
    #[error("failed to parse decimal '{text}': {source}")]
    DecimalParse {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Error returned by [`RawValue`](crate::RawValue) typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
