use pqtree_core::{RawValue, ValueTypeError};

#[test]
fn typed_accessors_return_matching_values() {
    assert_eq!(RawValue::Bool(true).try_bool().unwrap(), Some(true));
    assert_eq!(RawValue::I32(-7).try_i32().unwrap(), Some(-7));
    assert_eq!(RawValue::I64(1 << 40).try_i64().unwrap(), Some(1 << 40));
    assert_eq!(RawValue::Int96([1, 2, 3]).try_int96().unwrap(), Some([1, 2, 3]));
    assert_eq!(RawValue::F32(0.5).try_f32().unwrap(), Some(0.5));
    assert_eq!(RawValue::F64(2.25).try_f64().unwrap(), Some(2.25));
    assert_eq!(
        RawValue::bytes(b"abc").try_bytes().unwrap(),
        Some(&b"abc"[..])
    );
}

#[test]
fn typed_accessors_map_null_to_none() {
    let null = RawValue::Null;
    assert!(null.is_null());
    assert_eq!(null.try_bool().unwrap(), None);
    assert_eq!(null.try_i32().unwrap(), None);
    assert_eq!(null.try_i64().unwrap(), None);
    assert_eq!(null.try_int96().unwrap(), None);
    assert_eq!(null.try_f32().unwrap(), None);
    assert_eq!(null.try_f64().unwrap(), None);
    assert_eq!(null.try_bytes().unwrap(), None);
}

#[test]
fn typed_accessors_report_mismatches() {
    let err = RawValue::I64(1).try_i32().unwrap_err();
    assert_eq!(err, ValueTypeError::new("I32", "I64"));
    assert_eq!(err.to_string(), "expected I32, got I64");

    let err = RawValue::F32(1.0).try_bytes().unwrap_err();
    assert_eq!(err.expected, "Bytes");
    assert_eq!(err.actual, "F32");

    assert!(RawValue::bytes([0u8]).try_int96().is_err());
}
