//! Flat schema elements and the nested tree rebuilt from them.

mod element;
mod format;
mod tree;

pub use element::{ConvertedType, PhysicalType, Repetition, SchemaElement};
pub use format::format_schema_tree;
pub use tree::{SchemaNode, build_schema_tree};
