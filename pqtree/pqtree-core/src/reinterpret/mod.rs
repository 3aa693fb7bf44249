//! Decide which column paths need a post-decode transform, and apply it.

mod convert;
mod field;
mod policy;
mod resolver;

pub use convert::{
    decimal_bytes_to_string, decimal_to_f64, int96_to_timestamp_micros, normalize_byte_order,
    reinterpret_value, reverse_bytes_in_place,
};
pub use field::{ReinterpretField, ReinterpretFields};
pub use policy::InterimLayerPolicy;
pub use resolver::{reinterpret_fields, resolve_reinterpret_fields};
