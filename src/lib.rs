pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::convert::{PointConverter, RollupBatch};
pub use engine::entity::EntityType;
pub use engine::errors::TsKvError;
pub use engine::kv::{KvEntry, TsKvEntry};
pub use engine::point::{PointKey, TsKvPoint};
pub use engine::reduce::{AggregationKind, ContractViolation, PartialAggregateRow, RollupRow};
pub use engine::types::{LogicalType, TypedValue};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
