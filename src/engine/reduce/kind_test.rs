use crate::engine::errors::TsKvError;
use crate::engine::reduce::kind::AggregationKind;
use crate::engine::types::TypedValue;
use crate::test_helpers::factories::PartialRowFactory;

#[test]
fn aggregation_kind_parses_names() {
    assert_eq!("avg".parse::<AggregationKind>().unwrap(), AggregationKind::Avg);
    assert_eq!("SUM".parse::<AggregationKind>().unwrap(), AggregationKind::Sum);
    assert_eq!(" Max ".parse::<AggregationKind>().unwrap(), AggregationKind::Max);
    assert_eq!("".parse::<AggregationKind>().unwrap(), AggregationKind::None);
    for kind in [
        AggregationKind::None,
        AggregationKind::Min,
        AggregationKind::Max,
        AggregationKind::Avg,
        AggregationKind::Sum,
        AggregationKind::Count,
    ] {
        assert_eq!(kind.to_string().parse::<AggregationKind>().unwrap(), kind);
    }
}

#[test]
fn aggregation_kind_rejects_unknown() {
    let err = "MEDIAN".parse::<AggregationKind>().unwrap_err();
    assert!(matches!(err, TsKvError::UnknownAggregation(ref s) if s == "MEDIAN"));
}

#[test]
fn reduce_dispatches_to_matching_reducer() {
    let row = PartialRowFactory::new()
        .with_long_sum(10)
        .with_double_sum(5.0)
        .with_counts(0, 0, 1, 1)
        .create();
    assert_eq!(AggregationKind::Avg.reduce(&row), TypedValue::Float64(7.5));
    assert_eq!(AggregationKind::Sum.reduce(&row), TypedValue::Float64(15.0));
    assert_eq!(AggregationKind::Count.reduce(&row), TypedValue::Int64(2));
}

#[test]
fn reduce_min_and_max_use_direct_columns() {
    let row = PartialRowFactory::new().with_long(3).with_double(4.5).create();
    assert_eq!(AggregationKind::Max.reduce(&row), TypedValue::Float64(4.5));
    assert_eq!(AggregationKind::Min.reduce(&row), TypedValue::Float64(3.0));
}

#[test]
fn reduce_none_resolves_raw_value() {
    let row = PartialRowFactory::new().with_bool(true).create();
    assert_eq!(AggregationKind::None.reduce(&row), TypedValue::Boolean(true));
    let empty = PartialRowFactory::new().create();
    assert_eq!(AggregationKind::None.reduce(&empty), TypedValue::Empty);
}

#[test]
fn aggregation_kind_serde_is_uppercase() {
    assert_eq!(serde_json::to_string(&AggregationKind::Count).unwrap(), "\"COUNT\"");
    let k: AggregationKind = serde_json::from_str("\"MIN\"").unwrap();
    assert_eq!(k, AggregationKind::Min);
}
