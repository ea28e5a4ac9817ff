use rayon::prelude::*;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::engine::convert::converter::PointConverter;
use crate::engine::errors::TsKvError;
use crate::engine::kv::TsKvEntry;
use crate::engine::point::TsKvPoint;
use crate::engine::reduce::{AggregationKind, ContractViolation, RollupRow};
use crate::shared::config::QueryConfig;

/// Reduces every row of one query result with the same aggregation kind.
///
/// Rows are independent, so large batches are spread over the rayon pool.
/// Output is the same on both paths: empty points dropped, stable-sorted by
/// timestamp.
#[derive(Debug, Clone)]
pub struct RollupBatch {
    kind: AggregationKind,
    parallel_threshold: usize,
}

impl RollupBatch {
    pub fn new(kind: AggregationKind) -> Self {
        Self::from_config(kind, &QueryConfig::default())
    }

    pub fn from_config(kind: AggregationKind, cfg: &QueryConfig) -> Self {
        Self {
            kind,
            parallel_threshold: cfg.parallel_threshold,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn kind(&self) -> AggregationKind {
        self.kind
    }

    pub fn reduce_rows(&self, rows: Vec<RollupRow>) -> Vec<TsKvPoint> {
        let total = rows.len();
        let kind = self.kind;
        let mut points: Vec<TsKvPoint> = if total >= self.parallel_threshold {
            rows.into_par_iter()
                .map(|row| reduce_one(kind, row))
                .filter(PointConverter::is_not_empty)
                .collect()
        } else {
            rows.into_iter()
                .map(|row| reduce_one(kind, row))
                .filter(PointConverter::is_not_empty)
                .collect()
        };
        points.sort_by_key(|p| p.ts());

        debug!(
            target: "tskv_rollup::batch",
            kind = %kind,
            rows = total,
            kept = points.len(),
            "Reduced rollup batch"
        );
        points
    }

    pub fn into_entries(&self, rows: Vec<RollupRow>) -> Vec<TsKvEntry> {
        self.reduce_rows(rows)
            .into_iter()
            .map(PointConverter::into_entry)
            .collect()
    }

    /// Decodes rows handed over as a JSON array and reduces them.
    pub fn entries_from_json(&self, rows: JsonValue) -> Result<Vec<TsKvEntry>, TsKvError> {
        let rows: Vec<RollupRow> = serde_json::from_value(rows).map_err(|e| {
            let err = TsKvError::from(e);
            err.log_error();
            err
        })?;
        Ok(self.into_entries(rows))
    }
}

fn reduce_one(kind: AggregationKind, row: RollupRow) -> TsKvPoint {
    if let Some(violation) = ContractViolation::detect(kind, &row.columns) {
        warn!(
            target: "tskv_rollup::batch",
            kind = %kind,
            entity_id = %row.id.entity_id,
            key = %row.id.key,
            ts = row.id.ts,
            "{}",
            violation
        );
    }
    PointConverter::from_row(kind, row)
}
