//! Parquet front end for `pqtree`.
//!
//! Opens Parquet files through pluggable [`ByteSource`]s, rebuilds their schema
//! tree with `pqtree-core`, and reads leaf columns with decimal, interval and
//! legacy INT96 values reinterpreted.

mod arrow_convert;
mod column;
mod error;
mod location;
mod reader;
mod schema;
mod source;

pub use arrow_convert::{TIMESTAMP_TZ, column_to_arrow};
pub use column::ColumnValues;
pub use error::{LocationError, ParquetReaderError, SourceError};
pub use location::Location;
pub use pqtree_core as core;
pub use reader::{ParquetFile, ParquetReader, ParquetReaderBuilder};
pub use schema::schema_elements_from_parquet;
pub use source::{ByteSource, LocalFileSource, MemorySource};
