use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::engine::types::{LogicalType, TypedValue};

/// A key tagged with exactly one typed value, or with `Empty` when the row
/// contributed nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KvEntry {
    key: String,
    value: TypedValue,
}

impl KvEntry {
    pub fn new(key: impl Into<String>, value: TypedValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    pub fn into_value(self) -> TypedValue {
        self.value
    }

    pub fn data_type(&self) -> LogicalType {
        self.value.logical_type()
    }

    pub fn bool_value(&self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn str_value(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn long_value(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn double_value(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// Renders the value as text; `Empty` renders as an empty string.
    pub fn value_as_string(&self) -> String {
        self.value.to_string()
    }
}

/// A [`KvEntry`] stamped with the point's timestamp (ms since epoch).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsKvEntry {
    ts: i64,
    #[serde(flatten)]
    entry: KvEntry,
}

impl TsKvEntry {
    pub fn new(ts: i64, entry: KvEntry) -> Self {
        Self { ts, entry }
    }

    pub fn ts(&self) -> i64 {
        self.ts
    }

    pub fn key(&self) -> &str {
        self.entry.key()
    }

    pub fn value(&self) -> &TypedValue {
        self.entry.value()
    }

    pub fn entry(&self) -> &KvEntry {
        &self.entry
    }

    pub fn data_type(&self) -> LogicalType {
        self.entry.data_type()
    }

    pub fn value_as_string(&self) -> String {
        self.entry.value_as_string()
    }

    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::with_capacity(3);
        map.insert("ts".to_string(), JsonValue::from(self.ts));
        map.insert("key".to_string(), JsonValue::String(self.entry.key.clone()));
        map.insert("value".to_string(), self.entry.value.to_json());
        JsonValue::Object(map)
    }
}
