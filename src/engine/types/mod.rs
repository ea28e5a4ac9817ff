use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use crate::engine::errors::TsKvError;
use crate::engine::kv::KvEntry;

/// Type tag of a telemetry value as seen by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Empty,
    Boolean,
    String,
    Long,
    Double,
}

impl LogicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Empty => "EMPTY",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::String => "STRING",
            LogicalType::Long => "LONG",
            LogicalType::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = TsKvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EMPTY" => Ok(LogicalType::Empty),
            "BOOLEAN" => Ok(LogicalType::Boolean),
            "STRING" => Ok(LogicalType::String),
            "LONG" => Ok(LogicalType::Long),
            "DOUBLE" => Ok(LogicalType::Double),
            _ => Err(TsKvError::UnknownDataType(s.to_string())),
        }
    }
}

/// A single telemetry value. `Empty` means "no sample" and is a valid state,
/// not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypedValue {
    #[default]
    Empty,
    Boolean(bool),
    Utf8(String),
    Int64(i64),
    Float64(f64),
}

impl TypedValue {
    /// Resolves the four nullable storage columns of a raw row into one value.
    ///
    /// Well-formed rows carry at most one populated column. When a malformed
    /// row carries several, the first populated one in the order
    /// string, long, double, boolean wins and the rest are ignored.
    pub fn from_columns(
        bool_v: Option<bool>,
        str_v: Option<String>,
        long_v: Option<i64>,
        dbl_v: Option<f64>,
    ) -> Self {
        if let Some(s) = str_v {
            TypedValue::Utf8(s)
        } else if let Some(l) = long_v {
            TypedValue::Int64(l)
        } else if let Some(d) = dbl_v {
            TypedValue::Float64(d)
        } else if let Some(b) = bool_v {
            TypedValue::Boolean(b)
        } else {
            TypedValue::Empty
        }
    }

    pub fn logical_type(&self) -> LogicalType {
        match self {
            TypedValue::Empty => LogicalType::Empty,
            TypedValue::Boolean(_) => LogicalType::Boolean,
            TypedValue::Utf8(_) => LogicalType::String,
            TypedValue::Int64(_) => LogicalType::Long,
            TypedValue::Float64(_) => LogicalType::Double,
        }
    }

    pub fn is_populated(&self) -> bool {
        !matches!(self, TypedValue::Empty)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric view of the value, promoting integers. Used only where a
    /// caller explicitly asks for a number; the value itself never changes type.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            TypedValue::Int64(i) => Some(*i as f64),
            TypedValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Tags the value with `key` for downstream consumption.
    pub fn to_entry(&self, key: impl Into<String>) -> KvEntry {
        KvEntry::new(key, self.clone())
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            TypedValue::Empty => JsonValue::Null,
            TypedValue::Boolean(b) => JsonValue::Bool(*b),
            TypedValue::Utf8(s) => JsonValue::String(s.clone()),
            TypedValue::Int64(i) => JsonValue::Number(Number::from(*i)),
            // NaN and infinities have no JSON form
            TypedValue::Float64(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Empty => Ok(()),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Utf8(s) => f.write_str(s),
            TypedValue::Int64(i) => write!(f, "{}", i),
            TypedValue::Float64(d) => write!(f, "{}", d),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Boolean(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Utf8(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::Utf8(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::Int64(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        TypedValue::Float64(value)
    }
}

impl From<&TypedValue> for JsonValue {
    fn from(value: &TypedValue) -> Self {
        value.to_json()
    }
}

/// Only JSON scalars that map onto a variant without loss are accepted.
/// Arrays, objects and integers outside the `i64` range are rejected.
impl TryFrom<JsonValue> for TypedValue {
    type Error = TsKvError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Ok(TypedValue::Empty),
            JsonValue::Bool(b) => Ok(TypedValue::Boolean(b)),
            JsonValue::Number(num) => {
                if let Some(i) = num.as_i64() {
                    Ok(TypedValue::Int64(i))
                } else if num.is_f64() {
                    num.as_f64()
                        .map(TypedValue::Float64)
                        .ok_or_else(|| TsKvError::UnsupportedValue(num.to_string()))
                } else {
                    Err(TsKvError::UnsupportedValue(num.to_string()))
                }
            }
            JsonValue::String(s) => Ok(TypedValue::Utf8(s)),
            other @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
                Err(TsKvError::UnsupportedValue(other.to_string()))
            }
        }
    }
}

impl Serialize for TypedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TypedValue::Empty => serializer.serialize_unit(),
            TypedValue::Boolean(b) => serializer.serialize_bool(*b),
            TypedValue::Utf8(s) => serializer.serialize_str(s),
            TypedValue::Int64(i) => serializer.serialize_i64(*i),
            TypedValue::Float64(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for TypedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        TypedValue::try_from(json).map_err(serde::de::Error::custom)
    }
}
