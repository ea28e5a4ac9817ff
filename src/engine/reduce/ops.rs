//! Reducers that collapse the partial aggregates of one bucket into a single
//! value. Every function here is pure: no state, no I/O, no panics, and the
//! same inputs always give the same output, so rows may be reduced from any
//! number of threads at once.
//!
//! Absent counters are read as zero. Absent sums and direct values are not.

use crate::engine::reduce::row::PartialAggregateRow;
use crate::engine::types::TypedValue;

/// AVG over integer and floating samples of one bucket.
///
/// The caller must guarantee `long_count + double_count > 0`. With a zero
/// total the result is NaN or an infinity, never a panic.
pub fn avg(
    long_sum: Option<i64>,
    double_sum: Option<f64>,
    long_count: Option<i64>,
    double_count: Option<i64>,
) -> TypedValue {
    let mut sum = 0.0;
    if let Some(l) = long_sum {
        sum += l as f64;
    }
    if let Some(d) = double_sum {
        sum += d;
    }
    let count = long_count.unwrap_or(0) as f64 + double_count.unwrap_or(0) as f64;
    TypedValue::Float64(sum / count)
}

/// SUM over integer and floating samples of one bucket.
///
/// Stays an integer while every contribution was integral and promotes to
/// floating point as soon as any floating mass exists. With no sum at all
/// the bucket has no aggregate and the result is `Empty`, not zero.
pub fn sum(sum_long: Option<i64>, sum_double: Option<f64>) -> TypedValue {
    match (sum_long, sum_double) {
        (long, Some(d)) => TypedValue::Float64(d + long.map(|l| l as f64).unwrap_or(0.0)),
        (Some(l), None) => TypedValue::Int64(l),
        (None, None) => TypedValue::Empty,
    }
}

/// MIN or MAX of one bucket, selected by `maximize`.
///
/// The query has already picked the extreme per type; only the integer vs
/// floating tie is settled here, numerically. A lone numeric keeps its type.
/// Strings were ordered upstream and pass through untouched.
pub fn min_max(
    str_value: Option<String>,
    long_value: Option<i64>,
    double_value: Option<f64>,
    maximize: bool,
) -> TypedValue {
    if let Some(s) = str_value {
        return TypedValue::Utf8(s);
    }
    match (long_value, double_value) {
        // a NaN operand poisons the comparison instead of being skipped
        (Some(_), Some(d)) if d.is_nan() => TypedValue::Float64(f64::NAN),
        (Some(l), Some(d)) => {
            let l = l as f64;
            TypedValue::Float64(if maximize { d.max(l) } else { d.min(l) })
        }
        (Some(l), None) => TypedValue::Int64(l),
        (None, Some(d)) => TypedValue::Float64(d),
        (None, None) => TypedValue::Empty,
    }
}

/// COUNT of one bucket. Always an integer.
///
/// Buckets are grouped by sample type upstream, so normally one counter is
/// non-zero. Boolean wins over string, and integer and floating counts are
/// merged since they belong to the same numeric series.
pub fn count(
    bool_count: Option<i64>,
    str_count: Option<i64>,
    long_count: Option<i64>,
    double_count: Option<i64>,
) -> TypedValue {
    let bool_count = bool_count.unwrap_or(0);
    let str_count = str_count.unwrap_or(0);
    if bool_count != 0 {
        TypedValue::Int64(bool_count)
    } else if str_count != 0 {
        TypedValue::Int64(str_count)
    } else {
        TypedValue::Int64(
            long_count
                .unwrap_or(0)
                .saturating_add(double_count.unwrap_or(0)),
        )
    }
}

pub fn avg_row(row: &PartialAggregateRow) -> TypedValue {
    avg(row.long_sum, row.double_sum, row.long_count, row.double_count)
}

pub fn sum_row(row: &PartialAggregateRow) -> TypedValue {
    sum(row.long_sum, row.double_sum)
}

pub fn min_max_row(row: &PartialAggregateRow, maximize: bool) -> TypedValue {
    min_max(row.str_v.clone(), row.long_v, row.dbl_v, maximize)
}

pub fn count_row(row: &PartialAggregateRow) -> TypedValue {
    count(row.bool_count, row.str_count, row.long_count, row.double_count)
}
