use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::TsKvError;
use crate::engine::reduce::ops;
use crate::engine::reduce::row::PartialAggregateRow;
use crate::engine::types::TypedValue;

/// Aggregation requested for a bucketed query. `None` means raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationKind {
    #[default]
    None,
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl AggregationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationKind::None => "NONE",
            AggregationKind::Min => "MIN",
            AggregationKind::Max => "MAX",
            AggregationKind::Avg => "AVG",
            AggregationKind::Sum => "SUM",
            AggregationKind::Count => "COUNT",
        }
    }

    /// Collapses one result row with the reducer matching this kind.
    pub fn reduce(&self, row: &PartialAggregateRow) -> TypedValue {
        match self {
            AggregationKind::None => row.direct_value(),
            AggregationKind::Min => ops::min_max_row(row, false),
            AggregationKind::Max => ops::min_max_row(row, true),
            AggregationKind::Avg => ops::avg_row(row),
            AggregationKind::Sum => ops::sum_row(row),
            AggregationKind::Count => ops::count_row(row),
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationKind {
    type Err = TsKvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" | "" => Ok(AggregationKind::None),
            "MIN" => Ok(AggregationKind::Min),
            "MAX" => Ok(AggregationKind::Max),
            "AVG" => Ok(AggregationKind::Avg),
            "SUM" => Ok(AggregationKind::Sum),
            "COUNT" => Ok(AggregationKind::Count),
            _ => Err(TsKvError::UnknownAggregation(s.to_string())),
        }
    }
}
