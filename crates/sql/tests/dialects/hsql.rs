use crate::common::*;
use crate::fixtures::*;

const HSQL: Dialect = Dialect::HSql;

#[test]
fn test_contains_unnests() {
    assert_sql!(
        HSQL,
        "array_contains",
        [ints(), ArgumentExpr::integer(1)],
        "exists(select 1 from unnest(t0.ints) with ordinality t(val,idx) where t.val=1)"
    );
    assert_sql!(
        HSQL,
        "array_contains_nullable",
        [ints(), ArgumentExpr::null()],
        "exists(select 1 from unnest(t0.ints) with ordinality t(val,idx) where t.val is not distinct from NULL)"
    );
}

#[test]
fn test_intersects_is_null_for_null_arrays() {
    assert_sql!(
        HSQL,
        "array_intersects",
        [ints(), other_ints()],
        "case when t0.ints is not null and t0.other_ints is not null then exists(select t.val from unnest(t0.ints) with ordinality t(val,idx) where t.val is not null intersect select s.val from unnest(t0.other_ints) with ordinality s(val,idx)) end"
    );
}

#[test]
fn test_get_and_slice() {
    assert_sql!(
        HSQL,
        "array_get",
        [ints(), ArgumentExpr::integer(1)],
        "(select t.val from unnest(t0.ints) with ordinality t(val,idx) where t.idx=1)"
    );
    assert_sql!(
        HSQL,
        "array_slice",
        [ints(), ArgumentExpr::integer(1), ArgumentExpr::integer(2)],
        "case when t0.ints is not null and 1 is not null and 2 is not null then coalesce((select array_agg(t.val order by t.idx) from unnest(t0.ints) with ordinality t(val,idx) where t.idx between 1 and 2),array[]) end"
    );
}

#[test]
fn test_remove_keeps_empty_array() {
    assert_sql!(
        HSQL,
        "array_remove",
        [ints(), ArgumentExpr::integer(1)],
        "case when t0.ints is not null then coalesce((select array_agg(t.val order by t.idx) from unnest(t0.ints) with ordinality t(val,idx) where t.val is distinct from 1),array[]) end"
    );
}

#[test]
fn test_sort_array() {
    assert_sql!(HSQL, "array_sort", [ints()], "sort_array(t0.ints asc nulls last)");
    assert_sql!(
        HSQL,
        "array_sort",
        [ints(), ArgumentExpr::boolean(true)],
        "sort_array(t0.ints desc nulls first)"
    );
}

#[test]
fn test_set_sequence_array() {
    assert_sql!(
        HSQL,
        "array_set",
        [ints(), ArgumentExpr::integer(2), ArgumentExpr::integer(9)],
        "coalesce((select array_agg(case when t.i=2 then 9 when t.i<=coalesce(cardinality(t0.ints),0) then t0.ints[t.i] end order by t.i) from unnest(sequence_array(1,greatest(greatest(coalesce(cardinality(t0.ints),0),2),1),1)) t(i) where t.i<=greatest(coalesce(cardinality(t0.ints),0),2)),array[])"
    );
}

#[test]
fn test_to_string_group_concat() {
    assert_sql!(
        HSQL,
        "array_to_string",
        [ints(), ArgumentExpr::string(",")],
        "case when t0.ints is not null then coalesce((select group_concat(cast(t.val as varchar(32768)) order by t.idx separator ',') from unnest(t0.ints) with ordinality t(val,idx)),'') end"
    );
}

#[test]
fn test_to_string_requires_literal_separator() {
    assert_render_err!(
        HSQL,
        "array_to_string",
        [ints(), ArgumentExpr::parameter()],
        FunctionError::UnsupportedConstruct { .. }
    );
}
