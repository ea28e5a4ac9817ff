use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::engine::entity::EntityType;
use crate::engine::errors::TsKvError;
use crate::engine::point::PointKey;
use crate::engine::types::TypedValue;
use crate::shared::config::TsKvSchema;

/// Nullable columns of one query-result row as materialized by the query
/// layer. Which columns are set depends on the requested aggregation; a
/// reducer reads only the ones it needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialAggregateRow {
    // direct values (raw rows and MIN/MAX)
    pub bool_v: Option<bool>,
    pub str_v: Option<String>,
    pub long_v: Option<i64>,
    pub dbl_v: Option<f64>,

    // AVG / SUM
    pub long_sum: Option<i64>,
    pub double_sum: Option<f64>,

    // AVG / COUNT
    pub long_count: Option<i64>,
    pub double_count: Option<i64>,
    pub bool_count: Option<i64>,
    pub str_count: Option<i64>,
}

impl PartialAggregateRow {
    /// Row carrying only direct values, as returned by a raw (non-aggregated) query.
    pub fn raw(
        bool_v: Option<bool>,
        str_v: Option<String>,
        long_v: Option<i64>,
        dbl_v: Option<f64>,
    ) -> Self {
        Self {
            bool_v,
            str_v,
            long_v,
            dbl_v,
            ..Self::default()
        }
    }

    /// Resolves the direct value columns, applying the malformed-row precedence.
    pub fn direct_value(&self) -> TypedValue {
        TypedValue::from_columns(self.bool_v, self.str_v.clone(), self.long_v, self.dbl_v)
    }

    /// Number of direct value columns that are set. More than one means the
    /// row is malformed.
    pub fn populated_direct_columns(&self) -> usize {
        [
            self.bool_v.is_some(),
            self.str_v.is_some(),
            self.long_v.is_some(),
            self.dbl_v.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// A result row together with the identity of the point it will become.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RollupRow {
    #[serde(flatten)]
    pub id: PointKey,
    #[serde(flatten)]
    pub columns: PartialAggregateRow,
}

impl RollupRow {
    pub fn new(id: PointKey, columns: PartialAggregateRow) -> Self {
        Self { id, columns }
    }

    /// Decodes a raw storage record whose columns are named by `schema`.
    /// Identity columns are required; value columns may be null or absent.
    pub fn from_record(
        schema: &TsKvSchema,
        record: &Map<String, JsonValue>,
    ) -> Result<Self, TsKvError> {
        let entity_type: EntityType = required_str(record, &schema.entity_type_column)?.parse()?;
        let entity_id = required_str(record, &schema.entity_id_column)?;
        let key = required_str(record, &schema.key_column)?;
        let ts = match record.get(&schema.ts_column) {
            Some(v) => v.as_i64().ok_or_else(|| bad_column(&schema.ts_column, v))?,
            None => return Err(TsKvError::MissingColumn(schema.ts_column.clone())),
        };

        let bool_v = optional(record, &schema.bool_column, JsonValue::as_bool)?;
        let str_v = optional(record, &schema.str_column, |v| v.as_str().map(str::to_string))?;
        let long_v = optional(record, &schema.long_column, JsonValue::as_i64)?;
        let dbl_v = optional(record, &schema.dbl_column, JsonValue::as_f64)?;

        Ok(Self::new(
            PointKey::new(entity_type, entity_id, key, ts),
            PartialAggregateRow::raw(bool_v, str_v, long_v, dbl_v),
        ))
    }
}

fn bad_column(column: &str, value: &JsonValue) -> TsKvError {
    TsKvError::BadColumn {
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn required_str(record: &Map<String, JsonValue>, column: &str) -> Result<String, TsKvError> {
    match record.get(column) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Null) | None => Err(TsKvError::MissingColumn(column.to_string())),
        Some(other) => Err(bad_column(column, other)),
    }
}

fn optional<T>(
    record: &Map<String, JsonValue>,
    column: &str,
    read: impl Fn(&JsonValue) -> Option<T>,
) -> Result<Option<T>, TsKvError> {
    match record.get(column) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => read(v).map(Some).ok_or_else(|| bad_column(column, v)),
    }
}
