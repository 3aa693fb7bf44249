use std::{collections::BTreeMap, ops::Deref};

use crate::schema::{ConvertedType, PhysicalType};

/// Parameters of the transform needed by one column path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReinterpretField {
    pub physical_type: Option<PhysicalType>,
    pub converted_type: ConvertedType,
    pub precision: i32,
    pub scale: i32,
}

impl ReinterpretField {
    /// Legacy INT96 column, read as a microsecond timestamp.
    pub fn int96_timestamp() -> Self {
        Self {
            physical_type: Some(PhysicalType::Int96),
            converted_type: ConvertedType::TimestampMicros,
            precision: 0,
            scale: 0,
        }
    }
}

/// Mapping from dotted column path (root excluded) to its [`ReinterpretField`].
///
/// Built once per schema and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReinterpretFields(pub BTreeMap<String, ReinterpretField>);

impl ReinterpretFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&ReinterpretField> {
        self.0.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, path: String, field: ReinterpretField) -> Option<ReinterpretField> {
        self.0.insert(path, field)
    }
}

impl Deref for ReinterpretFields {
    type Target = BTreeMap<String, ReinterpretField>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<BTreeMap<String, ReinterpretField>> for ReinterpretFields {
    fn from(value: BTreeMap<String, ReinterpretField>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ReinterpretFields {
    type Item = (String, ReinterpretField);
    type IntoIter = std::collections::btree_map::IntoIter<String, ReinterpretField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
