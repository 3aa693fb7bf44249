use std::fmt;

/// Physical storage type of a leaf column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    /// Legacy 96-bit timestamp representation.
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl PhysicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int96 => "int96",
            Self::Float => "float",
            Self::Double => "double",
            Self::ByteArray => "byte_array",
            Self::FixedLenByteArray => "fixed_len_byte_array",
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical annotation layered on top of a physical type or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertedType {
    Utf8,
    /// Group encoding a map; its single child is the key-value container.
    Map,
    /// Repeated group holding one key/value pair of a map.
    MapKeyValue,
    /// Group encoding a list; its single child is the repeated interim layer.
    List,
    Enum,
    Decimal,
    Date,
    TimeMillis,
    TimeMicros,
    TimestampMillis,
    TimestampMicros,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Json,
    Bson,
    /// 12-byte little-endian months/days/millis interval.
    Interval,
}

impl ConvertedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Map => "map",
            Self::MapKeyValue => "map_key_value",
            Self::List => "list",
            Self::Enum => "enum",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::TimeMillis => "time_millis",
            Self::TimeMicros => "time_micros",
            Self::TimestampMillis => "timestamp_millis",
            Self::TimestampMicros => "timestamp_micros",
            Self::Uint8 => "uint_8",
            Self::Uint16 => "uint_16",
            Self::Uint32 => "uint_32",
            Self::Uint64 => "uint_64",
            Self::Int8 => "int_8",
            Self::Int16 => "int_16",
            Self::Int32 => "int_32",
            Self::Int64 => "int_64",
            Self::Json => "json",
            Self::Bson => "bson",
            Self::Interval => "interval",
        }
    }
}

impl fmt::Display for ConvertedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field repetition as declared in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    Required,
    Optional,
    Repeated,
}

impl Repetition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Repeated => "repeated",
        }
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the flat, preorder schema description.
///
/// Groups carry `num_children`; leaves carry `physical_type`. The first element
/// of a sequence is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaElement {
    pub name: String,
    pub physical_type: Option<PhysicalType>,
    pub converted_type: Option<ConvertedType>,
    pub repetition: Option<Repetition>,
    pub type_length: Option<i32>,
    pub num_children: Option<usize>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
}

impl SchemaElement {
    fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            physical_type: None,
            converted_type: None,
            repetition: None,
            type_length: None,
            num_children: None,
            precision: None,
            scale: None,
        }
    }

    /// Group element with `num_children` direct children.
    pub fn group(name: impl Into<String>, num_children: usize) -> Self {
        Self {
            num_children: Some(num_children),
            ..Self::named(name)
        }
    }

    /// Leaf element stored as `physical_type`.
    pub fn leaf(name: impl Into<String>, physical_type: PhysicalType) -> Self {
        Self {
            physical_type: Some(physical_type),
            ..Self::named(name)
        }
    }

    pub fn with_converted_type(mut self, converted_type: ConvertedType) -> Self {
        self.converted_type = Some(converted_type);
        self
    }

    /// Annotate as `DECIMAL(precision, scale)`.
    pub fn with_decimal(mut self, precision: i32, scale: i32) -> Self {
        self.converted_type = Some(ConvertedType::Decimal);
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn with_repetition(mut self, repetition: Repetition) -> Self {
        self.repetition = Some(repetition);
        self
    }

    pub fn with_type_length(mut self, type_length: i32) -> Self {
        self.type_length = Some(type_length);
        self
    }
}
