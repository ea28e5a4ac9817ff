use crate::engine::kv::TsKvEntry;
use crate::engine::point::TsKvPoint;
use crate::engine::reduce::{AggregationKind, RollupRow};

/// Turns points into the timestamped entries handed to downstream APIs.
pub struct PointConverter;

impl PointConverter {
    pub fn to_entry(point: &TsKvPoint) -> TsKvEntry {
        TsKvEntry::new(point.ts(), point.value().to_entry(point.key()))
    }

    pub fn into_entry(point: TsKvPoint) -> TsKvEntry {
        let (id, value) = point.into_parts();
        TsKvEntry::new(id.ts, value.to_entry(id.key))
    }

    /// False for rows that carry identity but contributed no value, such as
    /// buckets left over from an incomplete aggregation join.
    pub fn is_not_empty(point: &TsKvPoint) -> bool {
        point.value().is_populated()
    }

    /// Reduces one result row with `kind` and attaches the row identity.
    pub fn from_row(kind: AggregationKind, row: RollupRow) -> TsKvPoint {
        let value = kind.reduce(&row.columns);
        TsKvPoint::new(row.id, value)
    }
}
