use crate::engine::entity::EntityType;
use crate::engine::point::PointKey;
use crate::engine::reduce::{PartialAggregateRow, RollupRow};

pub struct RollupRowFactory {
    id: PointKey,
    columns: PartialAggregateRow,
}

impl RollupRowFactory {
    pub fn new() -> Self {
        Self {
            id: PointKey::new(EntityType::Device, "device-1", "temperature", 0),
            columns: PartialAggregateRow::default(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.id.key = key.to_string();
        self
    }

    pub fn with_ts(mut self, ts: i64) -> Self {
        self.id.ts = ts;
        self
    }

    pub fn with_columns(mut self, columns: PartialAggregateRow) -> Self {
        self.columns = columns;
        self
    }

    pub fn create(self) -> RollupRow {
        RollupRow::new(self.id, self.columns)
    }
}
