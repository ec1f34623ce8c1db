//! Record model for decoded WAM traces.
//!
//! A trace is a flat sequence of records. Each record is either a class
//! begin marker or a field value, and any record may close the current
//! class via its class-end flag.

use serde::Serialize;
use std::fmt;

/// Wire tag stored in the low two bits of a record's tag byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassType {
    /// Field of the root ("Wild") class
    Wild,
    /// Opens a class; the record id is the class id
    Begin,
    /// Field of the currently open class
    Data,
}

impl ClassType {
    /// Numeric wire tag
    pub fn tag(self) -> u8 {
        match self {
            Self::Wild => 0,
            Self::Begin => 1,
            Self::Data => 2,
        }
    }

    /// Map a wire tag back to a class type (`None` for the reserved tag 3)
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Wild),
            1 => Some(Self::Begin),
            2 => Some(Self::Data),
            _ => None,
        }
    }

    pub fn is_begin(self) -> bool {
        self == Self::Begin
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Value carried by a record
///
/// The set of kinds is closed: renderers match on the variant, never on
/// any runtime type information.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Absent,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
}

impl Value {
    /// Type tag shown next to the value in listings
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "nil",
            Self::Int8(_) => "i8",
            Self::Int16(_) => "i16",
            Self::Int32(_) => "i32",
            Self::Int64(_) => "i64",
            Self::Float64(_) => "f64",
            Self::Text(_) => "string",
        }
    }

    /// Widen any integer kind to i64
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int8(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::Int64(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("nil"),
            Self::Int8(v) => write!(f, "{}", v),
            Self::Int16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
            // Quoted so control characters cannot split a listing line
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Value", 2)?;
        state.serialize_field("type", self.type_name())?;
        match self {
            Self::Absent => state.serialize_field("value", &())?,
            Self::Int8(v) => state.serialize_field("value", v)?,
            Self::Int16(v) => state.serialize_field("value", v)?,
            Self::Int32(v) => state.serialize_field("value", v)?,
            Self::Int64(v) => state.serialize_field("value", v)?,
            Self::Float64(v) => state.serialize_field("value", v)?,
            Self::Text(s) => state.serialize_field("value", s)?,
        }
        state.end()
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Int8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Int32(v as i32)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// One decoded unit of a trace
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub class_type: ClassType,
    /// Class id for `ClassType::Begin`, field id otherwise
    pub id: i32,
    pub value: Value,
    pub is_class_end: bool,
}

impl Record {
    pub fn new(class_type: ClassType, id: i32, value: impl Into<Value>) -> Self {
        Self {
            class_type,
            id,
            value: value.into(),
            is_class_end: false,
        }
    }

    /// Class begin marker
    pub fn begin(class_id: i32, value: impl Into<Value>) -> Self {
        Self::new(ClassType::Begin, class_id, value)
    }

    /// Root-level field
    pub fn wild(id: i32, value: impl Into<Value>) -> Self {
        Self::new(ClassType::Wild, id, value)
    }

    /// Field of the open class
    pub fn data(id: i32, value: impl Into<Value>) -> Self {
        Self::new(ClassType::Data, id, value)
    }

    /// Mark this record as closing the current class
    pub fn ending(mut self) -> Self {
        self.is_class_end = true;
        self
    }
}
