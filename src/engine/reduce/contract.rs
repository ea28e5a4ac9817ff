use thiserror::Error;

use crate::engine::reduce::kind::AggregationKind;
use crate::engine::reduce::row::PartialAggregateRow;

/// Caller-contract breaches a row can carry into a reducer. Reducers never
/// return these; they are reported for diagnostics and the row is still
/// reduced as usual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("average requested over an empty bucket (total count is 0)")]
    UndefinedAggregate,

    #[error("sum requested with neither an integer nor a floating sum")]
    AmbiguousSum,

    #[error("row carries {populated} typed values, expected at most one")]
    MalformedRow { populated: usize },
}

impl ContractViolation {
    pub fn detect(kind: AggregationKind, row: &PartialAggregateRow) -> Option<Self> {
        match kind {
            AggregationKind::Avg => {
                let total = row.long_count.unwrap_or(0) as i128
                    + row.double_count.unwrap_or(0) as i128;
                (total == 0).then_some(ContractViolation::UndefinedAggregate)
            }
            AggregationKind::Sum => (row.long_sum.is_none() && row.double_sum.is_none())
                .then_some(ContractViolation::AmbiguousSum),
            AggregationKind::None => {
                let populated = row.populated_direct_columns();
                (populated > 1).then_some(ContractViolation::MalformedRow { populated })
            }
            AggregationKind::Min | AggregationKind::Max => {
                let numeric = row.long_v.is_some() || row.dbl_v.is_some();
                if row.str_v.is_some() && numeric {
                    Some(ContractViolation::MalformedRow {
                        populated: row.populated_direct_columns(),
                    })
                } else {
                    None
                }
            }
            AggregationKind::Count => None,
        }
    }
}
