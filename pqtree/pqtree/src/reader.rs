//! Parquet file reader with pluggable byte sources.

use std::{collections::HashMap, sync::Arc};

use bytes::Bytes;
use parquet::file::{
    metadata::ParquetMetaData,
    reader::{FileReader, SerializedFileReader},
};
use pqtree_core::{
    InterimLayerPolicy, RawValue, ReinterpretFields, SchemaNode, build_schema_tree,
    reinterpret_fields,
};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    column::{ColumnValues, read_raw_values},
    error::ParquetReaderError,
    location::Location,
    schema::{physical_type_from, schema_elements_from_parquet},
    source::{ByteSource, LocalFileSource},
};

const DEFAULT_BATCH_SIZE: usize = 1024;

/// Opens Parquet files through registered [`ByteSource`]s.
pub struct ParquetReader {
    sources: HashMap<String, Arc<dyn ByteSource>>,
    batch_size: usize,
}

/// Builder for configuring [`ParquetReader`].
pub struct ParquetReaderBuilder {
    sources: Vec<Arc<dyn ByteSource>>,
    batch_size: usize,
}

impl ParquetReader {
    /// Create a builder for [`ParquetReader`].
    pub fn builder() -> ParquetReaderBuilder {
        ParquetReaderBuilder {
            sources: Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Register a source for its scheme, replacing any previous one.
    pub fn register_source(&mut self, source: Box<dyn ByteSource>) {
        self.register_shared_source(Arc::from(source));
    }

    pub fn register_shared_source(&mut self, source: Arc<dyn ByteSource>) {
        self.sources.insert(source.scheme().to_string(), source);
    }

    fn find_source(&self, location: &Location) -> Result<&Arc<dyn ByteSource>, ParquetReaderError> {
        self.sources
            .get(location.scheme())
            .ok_or_else(|| ParquetReaderError::NoSource {
                scheme: location.scheme().to_string(),
            })
    }

    /// Parse `uri`, fetch its bytes and read the footer.
    pub fn open(&self, uri: &str) -> Result<ParquetFile, ParquetReaderError> {
        let location = Location::parse(uri)?;
        self.open_location(location)
    }

    pub fn open_location(&self, location: Location) -> Result<ParquetFile, ParquetReaderError> {
        let data = self.find_source(&location)?.fetch(&location)?;
        debug!(location = %location, bytes = data.len(), "fetched parquet file");
        ParquetFile::from_bytes(location, data, self.batch_size)
    }
}

impl Default for ParquetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ParquetReaderBuilder {
    /// Register a byte source.
    pub fn with_source(mut self, source: Box<dyn ByteSource>) -> Self {
        self.sources.push(Arc::from(source));
        self
    }

    pub fn with_shared_source(mut self, source: Arc<dyn ByteSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Register the built-in local filesystem source.
    pub fn with_default_sources(self) -> Self {
        self.with_source(Box::new(LocalFileSource))
    }

    /// Set the number of records decoded per column read call (default: 1024).
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Build the reader.
    pub fn build(self) -> ParquetReader {
        let mut reader = ParquetReader::new();
        reader.batch_size = self.batch_size;
        for source in self.sources {
            reader.register_shared_source(source);
        }
        reader
    }
}

/// An opened Parquet file with its schema tree already rebuilt.
pub struct ParquetFile {
    location: Location,
    reader: SerializedFileReader<Bytes>,
    schema_tree: SchemaNode,
    batch_size: usize,
}

impl std::fmt::Debug for ParquetFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParquetFile")
            .field("location", &self.location)
            .field("num_rows", &self.num_rows())
            .finish_non_exhaustive()
    }
}

impl ParquetFile {
    fn from_bytes(
        location: Location,
        data: Bytes,
        batch_size: usize,
    ) -> Result<Self, ParquetReaderError> {
        let reader = SerializedFileReader::new(data)?;
        let elements = schema_elements_from_parquet(reader.metadata().file_metadata().schema());
        let element_count = elements.len();
        let schema_tree =
            build_schema_tree(elements).map_err(|source| ParquetReaderError::SchemaTree {
                location: location.to_string(),
                source,
            })?;
        debug!(
            location = %location,
            elements = element_count,
            row_groups = reader.num_row_groups(),
            "opened parquet file"
        );

        Ok(Self {
            location,
            reader,
            schema_tree,
            batch_size,
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn metadata(&self) -> &ParquetMetaData {
        self.reader.metadata()
    }

    pub fn num_rows(&self) -> i64 {
        self.metadata().file_metadata().num_rows()
    }

    pub fn schema_tree(&self) -> &SchemaNode {
        &self.schema_tree
    }

    /// Dotted paths of every leaf column in footer order.
    pub fn column_paths(&self) -> Vec<String> {
        self.metadata()
            .file_metadata()
            .schema_descr()
            .columns()
            .iter()
            .map(|col| col.path().string())
            .collect()
    }

    pub fn reinterpret_fields(&self, policy: InterimLayerPolicy) -> ReinterpretFields {
        reinterpret_fields(&self.schema_tree, policy)
    }

    /// Decode a leaf column without reinterpretation.
    pub fn read_raw_column(&self, path: &str) -> Result<Vec<RawValue>, ParquetReaderError> {
        let (index, max_def_level) = self.column_index(path)?;
        Ok(read_raw_values(
            &self.reader,
            index,
            max_def_level,
            self.batch_size,
        )?)
    }

    /// Decode a leaf column together with the reinterpretation it needs.
    pub fn read_column(&self, path: &str) -> Result<ColumnValues, ParquetReaderError> {
        let fields = self.reinterpret_fields(InterimLayerPolicy::Keep);
        self.read_column_with(path, &fields)
    }

    /// Decode several leaf columns in parallel, returned in request order.
    pub fn read_columns<S>(&self, paths: &[S]) -> Result<Vec<ColumnValues>, ParquetReaderError>
    where
        S: AsRef<str> + Sync,
    {
        let fields = self.reinterpret_fields(InterimLayerPolicy::Keep);
        paths
            .par_iter()
            .map(|path| self.read_column_with(path.as_ref(), &fields))
            .collect()
    }

    // Column reads key fields by physical path, so `fields` must be resolved with `Keep`.
    fn read_column_with(
        &self,
        path: &str,
        fields: &ReinterpretFields,
    ) -> Result<ColumnValues, ParquetReaderError> {
        let (index, max_def_level) = self.column_index(path)?;
        let descr = self.metadata().file_metadata().schema_descr().column(index);
        let values = read_raw_values(&self.reader, index, max_def_level, self.batch_size)?;
        let converted_type = self
            .schema_tree
            .find(path)
            .and_then(|node| node.element.converted_type);
        debug!(path, values = values.len(), "read column");

        Ok(ColumnValues {
            path: path.to_string(),
            physical_type: physical_type_from(descr.physical_type()),
            converted_type,
            field: fields.get(path).copied(),
            values,
        })
    }

    fn column_index(&self, path: &str) -> Result<(usize, i16), ParquetReaderError> {
        self.metadata()
            .file_metadata()
            .schema_descr()
            .columns()
            .iter()
            .enumerate()
            .find(|(_, col)| col.path().string() == path)
            .map(|(index, col)| (index, col.max_def_level()))
            .ok_or_else(|| ParquetReaderError::ColumnNotFound {
                path: path.to_string(),
            })
    }
}
