use std::borrow::Cow;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::ReinterpretField;
use crate::{
    error::ReinterpretError,
    schema::{ConvertedType, PhysicalType},
    value::{LogicalValue, RawValue},
};

/// Julian day number of 1970-01-01.
const JULIAN_UNIX_EPOCH: i64 = 2_440_588;
const MICROS_PER_DAY: i64 = 86_400_000_000;

/// Apply the transform described by `field` to one raw value.
///
/// `Null` yields `Ok(None)` for every field.
pub fn reinterpret_value(
    field: &ReinterpretField,
    raw: &RawValue,
) -> Result<Option<LogicalValue>, ReinterpretError> {
    if raw.is_null() {
        return Ok(None);
    }
    match field.converted_type {
        ConvertedType::Decimal | ConvertedType::Interval => {
            Ok(decimal_to_f64(field, raw)?.map(LogicalValue::Float))
        }
        ConvertedType::TimestampMicros if field.physical_type == Some(PhysicalType::Int96) => {
            Ok(int96_to_timestamp_micros(raw)?.map(LogicalValue::TimestampMicros))
        }
        converted_type => Err(ReinterpretError::UnsupportedField { converted_type }),
    }
}

/// Convert a fixed-point decimal (or interval) value to a double.
///
/// Integers are divided by `10^scale`. Byte arrays are first brought to
/// big-endian order, then read as a two's-complement integer with `scale`
/// fractional digits. Precision beyond `f64` is lost.
pub fn decimal_to_f64(
    field: &ReinterpretField,
    raw: &RawValue,
) -> Result<Option<f64>, ReinterpretError> {
    match raw {
        RawValue::Null => Ok(None),
        RawValue::I32(v) => Ok(Some(f64::from(*v) / 10f64.powi(field.scale))),
        RawValue::I64(v) => Ok(Some(*v as f64 / 10f64.powi(field.scale))),
        RawValue::Bytes(bytes) => {
            let bytes = normalize_byte_order(field, bytes);
            let text = decimal_bytes_to_string(&bytes, field.precision, field.scale);
            text.parse::<f64>()
                .map(Some)
                .map_err(|source| ReinterpretError::DecimalParse { text, source })
        }
        other => Err(ReinterpretError::UnsupportedRawValue {
            converted_type: field.converted_type,
            source: other.type_mismatch("I32, I64 or Bytes"),
        }),
    }
}

/// Bring decimal-like byte arrays to big-endian order.
///
/// Intervals are stored little-endian and come back reversed; decimals are
/// already big-endian and are borrowed unchanged.
pub fn normalize_byte_order<'a>(field: &ReinterpretField, bytes: &'a [u8]) -> Cow<'a, [u8]> {
    if field.converted_type == ConvertedType::Interval {
        let mut owned = bytes.to_vec();
        reverse_bytes_in_place(&mut owned);
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(bytes)
    }
}

pub fn reverse_bytes_in_place(bytes: &mut [u8]) {
    bytes.reverse();
}

/// Render a big-endian two's-complement integer with `scale` fractional digits.
///
/// Any width is accepted; an empty slice is zero. `precision` is carried for
/// the caller's benefit and does not truncate the result.
pub fn decimal_bytes_to_string(bytes: &[u8], _precision: i32, scale: i32) -> String {
    let unscaled = BigInt::from_signed_bytes_be(bytes);
    BigDecimal::new(unscaled, i64::from(scale)).to_string()
}

/// Convert a legacy INT96 timestamp to microseconds since the Unix epoch.
///
/// The first two words hold nanoseconds within the day (little-endian), the
/// third the Julian day number. Sub-microsecond precision is truncated.
pub fn int96_to_timestamp_micros(raw: &RawValue) -> Result<Option<i64>, ReinterpretError> {
    let words = raw
        .try_int96()
        .map_err(|source| ReinterpretError::UnsupportedRawValue {
            converted_type: ConvertedType::TimestampMicros,
            source,
        })?;
    let Some(words) = words else {
        return Ok(None);
    };
    let nanos_of_day = (i64::from(words[1]) << 32) | i64::from(words[0]);
    let days = i64::from(words[2]) - JULIAN_UNIX_EPOCH;
    Ok(Some(days * MICROS_PER_DAY + nanos_of_day / 1_000))
}
