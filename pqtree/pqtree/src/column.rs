//! Leaf column decoding into [`RawValue`]s.

use parquet::{
    column::reader::{ColumnReader, ColumnReaderImpl},
    data_type::DataType,
    errors::ParquetError,
    file::reader::FileReader,
};
use pqtree_core::{
    ConvertedType, LogicalValue, PhysicalType, RawValue, ReinterpretField, reinterpret_value,
};

use crate::error::ParquetReaderError;

/// Decoded values of one leaf column, paired with the transform they need.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValues {
    /// Dotted physical column path, root excluded.
    pub path: String,
    pub physical_type: PhysicalType,
    pub converted_type: Option<ConvertedType>,
    /// Present when the raw values are not semantically final.
    pub field: Option<ReinterpretField>,
    /// One entry per level slot; `Null` where the value is undefined.
    pub values: Vec<RawValue>,
}

impl ColumnValues {
    pub fn needs_reinterpretation(&self) -> bool {
        self.field.is_some()
    }

    /// Reinterpret every value, or `None` when the column is already final.
    ///
    /// The first value that cannot be converted aborts the whole column.
    pub fn reinterpreted(&self) -> Result<Option<Vec<Option<LogicalValue>>>, ParquetReaderError> {
        let Some(field) = &self.field else {
            return Ok(None);
        };
        self.values
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                reinterpret_value(field, raw).map_err(|source| ParquetReaderError::Reinterpret {
                    path: self.path.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Decode column `column_index` of every row group.
pub(crate) fn read_raw_values(
    reader: &dyn FileReader,
    column_index: usize,
    max_def_level: i16,
    batch_size: usize,
) -> Result<Vec<RawValue>, ParquetError> {
    let mut out = Vec::new();
    for rg_idx in 0..reader.num_row_groups() {
        let row_group = reader.get_row_group(rg_idx)?;
        let batch = Batch {
            max_def_level,
            batch_size,
        };
        match row_group.get_column_reader(column_index)? {
            ColumnReader::BoolColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| RawValue::Bool(*v))?,
            ColumnReader::Int32ColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| RawValue::I32(*v))?,
            ColumnReader::Int64ColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| RawValue::I64(*v))?,
            ColumnReader::Int96ColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| {
                let words = v.data();
                RawValue::Int96([words[0], words[1], words[2]])
            })?,
            ColumnReader::FloatColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| RawValue::F32(*v))?,
            ColumnReader::DoubleColumnReader(mut r) => batch.drain(&mut r, &mut out, |v| RawValue::F64(*v))?,
            ColumnReader::ByteArrayColumnReader(mut r) => {
                batch.drain(&mut r, &mut out, |v| RawValue::bytes(v.data()))?
            }
            ColumnReader::FixedLenByteArrayColumnReader(mut r) => {
                batch.drain(&mut r, &mut out, |v| RawValue::bytes(v.data()))?
            }
        }
    }
    Ok(out)
}

struct Batch {
    max_def_level: i16,
    batch_size: usize,
}

impl Batch {
    /// Read records until the column chunk is exhausted, emitting `Null` for
    /// every level slot whose definition level is below the maximum.
    fn drain<T: DataType>(
        &self,
        reader: &mut ColumnReaderImpl<T>,
        out: &mut Vec<RawValue>,
        convert: impl Fn(&T::T) -> RawValue,
    ) -> Result<(), ParquetError> {
        let mut def_levels = Vec::with_capacity(self.batch_size);
        let mut rep_levels = Vec::with_capacity(self.batch_size);
        let mut values = Vec::with_capacity(self.batch_size);

        loop {
            def_levels.clear();
            rep_levels.clear();
            values.clear();
            let (records_read, values_read, levels_read) = reader.read_records(
                self.batch_size,
                Some(&mut def_levels),
                Some(&mut rep_levels),
                &mut values,
            )?;
            if records_read == 0 && values_read == 0 && levels_read == 0 {
                return Ok(());
            }

            if self.max_def_level == 0 {
                out.extend(values.iter().take(values_read).map(&convert));
                continue;
            }

            let mut present = values.iter().take(values_read);
            for level in def_levels.iter().take(levels_read) {
                let value = if *level == self.max_def_level {
                    present.next().map(&convert).unwrap_or(RawValue::Null)
                } else {
                    RawValue::Null
                };
                out.push(value);
            }
        }
    }
}
