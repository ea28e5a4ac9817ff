use crate::engine::entity::EntityType;
use crate::engine::point::{PointKey, TsKvPoint};
use crate::engine::types::TypedValue;

pub struct PointFactory {
    id: PointKey,
    value: TypedValue,
}

impl PointFactory {
    pub fn new() -> Self {
        Self {
            id: PointKey::new(EntityType::Device, "device-1", "temperature", 1_000),
            value: TypedValue::Float64(20.0),
        }
    }

    pub fn with_entity(mut self, entity_type: EntityType, entity_id: &str) -> Self {
        self.id.entity_type = entity_type;
        self.id.entity_id = entity_id.to_string();
        self
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.id.key = key.to_string();
        self
    }

    pub fn with_ts(mut self, ts: i64) -> Self {
        self.id.ts = ts;
        self
    }

    pub fn with_value(mut self, value: TypedValue) -> Self {
        self.value = value;
        self
    }

    pub fn create(self) -> TsKvPoint {
        TsKvPoint::new(self.id, self.value)
    }
}
