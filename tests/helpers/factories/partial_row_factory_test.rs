use crate::test_helpers::factory::Factory;

#[test]
fn partial_row_factory_defaults_to_empty_row() {
    let row = Factory::partial_row().create();
    assert_eq!(row.populated_direct_columns(), 0);
    assert_eq!(row.long_count, None);
}

#[test]
fn partial_row_factory_sets_counters_in_order() {
    let row = Factory::partial_row().with_counts(1, 2, 3, 4).create();
    assert_eq!(
        (row.bool_count, row.str_count, row.long_count, row.double_count),
        (Some(1), Some(2), Some(3), Some(4))
    );
}

#[test]
fn rollup_row_factory_builds_identity() {
    let row = Factory::rollup_row().with_key("k").with_ts(9).create();
    assert_eq!(row.id.key, "k");
    assert_eq!(row.id.ts, 9);
}
