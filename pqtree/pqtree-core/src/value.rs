//! Raw values produced by the column decoder and their reinterpreted forms.

use std::sync::Arc;

use crate::error::ValueTypeError;

/// Physical value as produced by the column decoder, before reinterpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    /// Legacy timestamp words as stored: nanos-of-day (low, high), Julian day.
    Int96([u32; 3]),
    F32(f32),
    F64(f64),
    Bytes(Arc<[u8]>),
}

impl RawValue {
    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            RawValue::Bool(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            RawValue::I32(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            RawValue::I64(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_int96(&self) -> Result<Option<[u32; 3]>, ValueTypeError> {
        match self {
            RawValue::Int96(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("Int96")),
        }
    }

    pub fn try_f32(&self) -> Result<Option<f32>, ValueTypeError> {
        match self {
            RawValue::F32(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            RawValue::F64(v) => Ok(Some(*v)),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            RawValue::Bytes(v) => Ok(Some(v.as_ref())),
            RawValue::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            RawValue::Null => "Null",
            RawValue::Bool(_) => "Bool",
            RawValue::I32(_) => "I32",
            RawValue::I64(_) => "I64",
            RawValue::Int96(_) => "Int96",
            RawValue::F32(_) => "F32",
            RawValue::F64(_) => "F64",
            RawValue::Bytes(_) => "Bytes",
        }
    }
}

/// Semantically final value produced by reinterpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicalValue {
    /// Decimal or interval widened to a double.
    Float(f64),
    /// Microseconds since the Unix epoch.
    TimestampMicros(i64),
}
