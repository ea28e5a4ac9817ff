pub mod contract;
pub mod kind;
pub mod ops;
pub mod row;

pub use contract::ContractViolation;
pub use kind::AggregationKind;
pub use row::{PartialAggregateRow, RollupRow};

#[cfg(test)]
mod kind_test;
