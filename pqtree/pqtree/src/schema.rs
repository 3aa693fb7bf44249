//! Flatten the `parquet` crate's schema into preorder [`SchemaElement`]s.

use parquet::{
    basic::{ConvertedType as ParquetConvertedType, Repetition as ParquetRepetition, Type},
    schema::types::Type as SchemaType,
};
use pqtree_core::{ConvertedType, PhysicalType, Repetition, SchemaElement};

/// Serialize a Parquet schema the way the file footer stores it: a preorder
/// list where every group records its child count and the root comes first.
pub fn schema_elements_from_parquet(root: &SchemaType) -> Vec<SchemaElement> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(ty) = stack.pop() {
        out.push(element_from_type(ty));
        if let SchemaType::GroupType { fields, .. } = ty {
            stack.extend(fields.iter().rev().map(|f| f.as_ref()));
        }
    }
    out
}

fn element_from_type(ty: &SchemaType) -> SchemaElement {
    let info = ty.get_basic_info();
    let mut element = match ty {
        SchemaType::PrimitiveType {
            physical_type,
            type_length,
            scale,
            precision,
            ..
        } => {
            let mut element = SchemaElement::leaf(info.name(), physical_type_from(*physical_type));
            if *physical_type == Type::FIXED_LEN_BYTE_ARRAY {
                element.type_length = Some(*type_length);
            }
            if info.converted_type() == ParquetConvertedType::DECIMAL {
                element.precision = Some(*precision);
                element.scale = Some(*scale);
            }
            element
        }
        SchemaType::GroupType { fields, .. } => SchemaElement::group(info.name(), fields.len()),
    };
    element.converted_type = converted_type_from(info.converted_type());
    if info.has_repetition() {
        element.repetition = Some(repetition_from(info.repetition()));
    }
    element
}

pub(crate) fn physical_type_from(ty: Type) -> PhysicalType {
    match ty {
        Type::BOOLEAN => PhysicalType::Boolean,
        Type::INT32 => PhysicalType::Int32,
        Type::INT64 => PhysicalType::Int64,
        Type::INT96 => PhysicalType::Int96,
        Type::FLOAT => PhysicalType::Float,
        Type::DOUBLE => PhysicalType::Double,
        Type::BYTE_ARRAY => PhysicalType::ByteArray,
        Type::FIXED_LEN_BYTE_ARRAY => PhysicalType::FixedLenByteArray,
    }
}

fn converted_type_from(ty: ParquetConvertedType) -> Option<ConvertedType> {
    Some(match ty {
        ParquetConvertedType::NONE => return None,
        ParquetConvertedType::UTF8 => ConvertedType::Utf8,
        ParquetConvertedType::MAP => ConvertedType::Map,
        ParquetConvertedType::MAP_KEY_VALUE => ConvertedType::MapKeyValue,
        ParquetConvertedType::LIST => ConvertedType::List,
        ParquetConvertedType::ENUM => ConvertedType::Enum,
        ParquetConvertedType::DECIMAL => ConvertedType::Decimal,
        ParquetConvertedType::DATE => ConvertedType::Date,
        ParquetConvertedType::TIME_MILLIS => ConvertedType::TimeMillis,
        ParquetConvertedType::TIME_MICROS => ConvertedType::TimeMicros,
        ParquetConvertedType::TIMESTAMP_MILLIS => ConvertedType::TimestampMillis,
        ParquetConvertedType::TIMESTAMP_MICROS => ConvertedType::TimestampMicros,
        ParquetConvertedType::UINT_8 => ConvertedType::Uint8,
        ParquetConvertedType::UINT_16 => ConvertedType::Uint16,
        ParquetConvertedType::UINT_32 => ConvertedType::Uint32,
        ParquetConvertedType::UINT_64 => ConvertedType::Uint64,
        ParquetConvertedType::INT_8 => ConvertedType::Int8,
        ParquetConvertedType::INT_16 => ConvertedType::Int16,
        ParquetConvertedType::INT_32 => ConvertedType::Int32,
        ParquetConvertedType::INT_64 => ConvertedType::Int64,
        ParquetConvertedType::JSON => ConvertedType::Json,
        ParquetConvertedType::BSON => ConvertedType::Bson,
        ParquetConvertedType::INTERVAL => ConvertedType::Interval,
    })
}

fn repetition_from(repetition: ParquetRepetition) -> Repetition {
    match repetition {
        ParquetRepetition::REQUIRED => Repetition::Required,
        ParquetRepetition::OPTIONAL => Repetition::Optional,
        ParquetRepetition::REPEATED => Repetition::Repeated,
    }
}
