use serde::{Deserialize, Serialize};

use crate::engine::entity::EntityType;
use crate::engine::types::TypedValue;

/// Natural identity of a telemetry point. No surrogate id exists; two points
/// with the same key are the same sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointKey {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub key: String,
    pub ts: i64,
}

impl PointKey {
    pub fn new(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        key: impl Into<String>,
        ts: i64,
    ) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.into(),
            key: key.into(),
            ts,
        }
    }
}

/// One typed value at one timestamp for one entity key. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsKvPoint {
    #[serde(flatten)]
    id: PointKey,
    value: TypedValue,
}

impl TsKvPoint {
    pub fn new(id: PointKey, value: TypedValue) -> Self {
        Self { id, value }
    }

    pub fn id(&self) -> &PointKey {
        &self.id
    }

    pub fn entity_type(&self) -> EntityType {
        self.id.entity_type
    }

    pub fn entity_id(&self) -> &str {
        &self.id.entity_id
    }

    pub fn key(&self) -> &str {
        &self.id.key
    }

    pub fn ts(&self) -> i64 {
        self.id.ts
    }

    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    pub fn into_parts(self) -> (PointKey, TypedValue) {
        (self.id, self.value)
    }
}
