//! Materialize decoded columns as Arrow arrays.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BinaryArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray, TimestampMicrosecondArray,
};
use pqtree_core::{ConvertedType, LogicalValue, PhysicalType, RawValue, ValueTypeError};

use crate::{column::ColumnValues, error::ParquetReaderError};

/// Timezone attached to reinterpreted INT96 timestamps.
pub const TIMESTAMP_TZ: &str = "+00:00";

/// Convert one column to an Arrow array of the same length.
///
/// Decimal and interval columns become `Float64`, INT96 columns become
/// UTC microsecond timestamps, and everything else keeps its physical type.
/// Byte arrays annotated as text become `Utf8`.
pub fn column_to_arrow(column: &ColumnValues) -> Result<ArrayRef, ParquetReaderError> {
    if let Some(values) = column.reinterpreted()? {
        let array: ArrayRef = if column.physical_type == PhysicalType::Int96 {
            Arc::new(
                values
                    .iter()
                    .map(|v| match v {
                        Some(LogicalValue::TimestampMicros(micros)) => Some(*micros),
                        _ => None,
                    })
                    .collect::<TimestampMicrosecondArray>()
                    .with_timezone(TIMESTAMP_TZ),
            )
        } else {
            Arc::new(
                values
                    .iter()
                    .map(|v| match v {
                        Some(LogicalValue::Float(f)) => Some(*f),
                        _ => None,
                    })
                    .collect::<Float64Array>(),
            )
        };
        return Ok(array);
    }

    let array: ArrayRef = match column.physical_type {
        PhysicalType::Boolean => Arc::new(typed::<BooleanArray, _>(column, RawValue::try_bool)?),
        PhysicalType::Int32 => Arc::new(typed::<Int32Array, _>(column, RawValue::try_i32)?),
        PhysicalType::Int64 => Arc::new(typed::<Int64Array, _>(column, RawValue::try_i64)?),
        PhysicalType::Float => Arc::new(typed::<Float32Array, _>(column, RawValue::try_f32)?),
        PhysicalType::Double => Arc::new(typed::<Float64Array, _>(column, RawValue::try_f64)?),
        PhysicalType::ByteArray | PhysicalType::FixedLenByteArray if is_text(column) => {
            Arc::new(typed::<StringArray, _>(column, |v: &RawValue| {
                Ok(v.try_bytes()?
                    .map(|b| String::from_utf8_lossy(b).into_owned()))
            })?)
        }
        PhysicalType::ByteArray | PhysicalType::FixedLenByteArray => {
            Arc::new(typed::<BinaryArray, _>(column, RawValue::try_bytes)?)
        }
        // INT96 only has a meaning once reinterpreted as a timestamp.
        PhysicalType::Int96 => {
            return Err(ParquetReaderError::MissingReinterpretField {
                path: column.path.clone(),
                physical_type: column.physical_type,
            });
        }
    };
    Ok(array)
}

fn typed<'a, A, T>(
    column: &'a ColumnValues,
    accessor: impl Fn(&'a RawValue) -> Result<Option<T>, ValueTypeError>,
) -> Result<A, ParquetReaderError>
where
    A: FromIterator<Option<T>>,
{
    column
        .values
        .iter()
        .map(accessor)
        .collect::<Result<A, _>>()
        .map_err(|source| ParquetReaderError::ValueType {
            path: column.path.clone(),
            source,
        })
}

fn is_text(column: &ColumnValues) -> bool {
    matches!(
        column.converted_type,
        Some(ConvertedType::Utf8 | ConvertedType::Enum | ConvertedType::Json)
    )
}
