use crate::common::*;
use crate::fixtures::*;

const CRDB: Dialect = Dialect::CockroachDb;

#[test]
fn test_shares_postgres_operators() {
    assert_sql!(CRDB, "array_contains", [ints(), ArgumentExpr::integer(1)], "t0.ints@>array[1]");
    assert_sql!(CRDB, "array_get", [ints(), ArgumentExpr::integer(1)], "t0.ints[1]");
}

#[test]
fn test_fill_uses_generate_series() {
    assert_sql!(
        CRDB,
        "array_fill",
        [ArgumentExpr::integer(0), ArgumentExpr::integer(3)],
        "coalesce((select array_agg(0) from generate_series(1,3)),cast(array[] as INTEGER[]))"
    );
    assert_sql!(
        CRDB,
        "array_fill_list",
        [ArgumentExpr::string("x"), ArgumentExpr::integer(2)],
        "coalesce((select array_agg('x') from generate_series(1,2)),cast(array[] as VARCHAR[]))"
    );
}

#[test]
fn test_trim_is_emulated_with_typed_empty_array() {
    let sql = render(CRDB, "array_trim", &[names(), ArgumentExpr::parameter()]).unwrap();
    assert!(sql.ends_with(",cast(array[] as VARCHAR[])) end"), "{}", sql);
    assert!(sql.contains("where t.idx<=cardinality(t0.names)-?"), "{}", sql);
}
