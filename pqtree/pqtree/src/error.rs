//! Error types for locations, byte sources and the Parquet reader.

use pqtree_core::{PhysicalType, ReinterpretError, SchemaTreeError, ValueTypeError};

/// A location string could not be turned into a [`Location`](crate::Location).
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("file location is empty")]
    Empty,

    #[error("unable to parse file location [{uri}]: {source}")]
    Parse {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The path holds percent escapes that are not valid UTF-8.
    #[error("file location [{uri}] is not valid UTF-8 after decoding: {source}")]
    Decode {
        uri: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Errors produced by [`ByteSource`](crate::ByteSource) implementations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open [{location}]: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no object named [{location}]")]
    NotFound { location: String },
}

/// Errors produced by [`ParquetReader`](crate::ParquetReader) and
/// [`ParquetFile`](crate::ParquetFile).
#[derive(Debug, thiserror::Error)]
pub enum ParquetReaderError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    /// No [`ByteSource`](crate::ByteSource) was registered for the scheme.
    #[error("unknown location scheme [{scheme}]")]
    NoSource { scheme: String },

    /// Error from the underlying `parquet` crate (bad magic, corrupt footer, ...).
    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    /// The footer's flat schema does not form a tree.
    #[error("malformed schema in [{location}]: {source}")]
    SchemaTree {
        location: String,
        #[source]
        source: SchemaTreeError,
    },

    #[error("column '{path}' not found")]
    ColumnNotFound { path: String },

    /// A single value could not be reinterpreted.
    #[error("failed to reinterpret value {index} of column '{path}': {source}")]
    Reinterpret {
        path: String,
        index: usize,
        #[source]
        source: ReinterpretError,
    },

    /// A decoded value does not match its column's physical type.
    #[error("unexpected value in column '{path}': {source}")]
    ValueType {
        path: String,
        #[source]
        source: ValueTypeError,
    },

    /// The column's physical type has no Arrow mapping without reinterpretation.
    #[error("column '{path}' of type {physical_type} needs a reinterpret field")]
    MissingReinterpretField {
        path: String,
        physical_type: PhysicalType,
    },

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}
