//! Format-agnostic core types and algorithms for `pqtree`.
//!
//! This crate rebuilds a nested [`SchemaNode`] tree from the flat, preorder
//! [`SchemaElement`] list stored in a Parquet footer, decides which leaf paths
//! need a post-decode transform ([`ReinterpretFields`]), and provides the
//! transforms themselves. It performs no I/O.

mod error;
pub mod reinterpret;
pub mod schema;
mod value;

pub use error::{ReinterpretError, SchemaTreeError, ValueTypeError};
pub use reinterpret::{
    InterimLayerPolicy, ReinterpretField, ReinterpretFields, decimal_bytes_to_string,
    decimal_to_f64, int96_to_timestamp_micros, normalize_byte_order, reinterpret_fields,
    reinterpret_value, resolve_reinterpret_fields, reverse_bytes_in_place,
};
pub use schema::{
    ConvertedType, PhysicalType, Repetition, SchemaElement, SchemaNode, build_schema_tree,
    format_schema_tree,
};
pub use value::{LogicalValue, RawValue};
