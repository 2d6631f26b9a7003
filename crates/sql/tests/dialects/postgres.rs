use crate::common::*;
use crate::fixtures::*;

const PG: Dialect = Dialect::PostgreSql;

#[test]
fn test_predicates() {
    assert_sql!(PG, "array_contains", [ints(), ArgumentExpr::integer(1)], "t0.ints@>array[1]");
    assert_sql!(
        PG,
        "array_contains_nullable",
        [ints(), ArgumentExpr::null()],
        "array_position(t0.ints,NULL) is not null"
    );
    assert_sql!(PG, "array_includes", [ints(), other_ints()], "t0.ints@>t0.other_ints");
    assert_sql!(
        PG,
        "array_includes_nullable",
        [ints(), other_ints()],
        "case when t0.ints is not null and t0.other_ints is not null then not exists(select unnest(t0.other_ints) except select unnest(t0.ints)) end"
    );
    assert_sql!(PG, "array_intersects", [ints(), other_ints()], "t0.ints&&t0.other_ints");
    assert_sql!(PG, "array_overlaps", [ints(), other_ints()], "t0.ints&&t0.other_ints");
    assert_sql!(
        PG,
        "array_intersects_nullable",
        [ints(), other_ints()],
        "case when t0.ints is not null and t0.other_ints is not null then exists(select unnest(t0.ints) intersect select unnest(t0.other_ints)) end"
    );
}

#[test]
fn test_contains_casts_untyped_parameter_only_without_array_type() {
    // The parameter is typed from the array, so no cast is needed
    assert_sql!(PG, "array_contains", [ints(), ArgumentExpr::parameter()], "t0.ints@>array[?]");
    assert_sql!(
        PG,
        "array_contains",
        [ints(), ArgumentExpr::null()],
        "t0.ints@>array[cast(NULL as INTEGER)]"
    );
}

#[test]
fn test_lookup() {
    assert_sql!(
        PG,
        "array_position",
        [ints(), ArgumentExpr::integer(5)],
        "case when t0.ints is not null then coalesce(array_position(t0.ints,5),0) end"
    );
    assert_sql!(
        PG,
        "array_position",
        [ints(), ArgumentExpr::integer(5), ArgumentExpr::integer(2)],
        "case when t0.ints is not null then coalesce(array_position(t0.ints,5,2),0) end"
    );
    assert_sql!(
        PG,
        "array_positions",
        [ints(), ArgumentExpr::integer(5)],
        "array_positions(t0.ints,5)"
    );
    assert_sql!(
        PG,
        "array_positions_list",
        [ints(), ArgumentExpr::integer(5)],
        "array_positions(t0.ints,5)"
    );
    assert_sql!(PG, "array_get", [ints(), ArgumentExpr::integer(1)], "t0.ints[1]");
    assert_sql!(PG, "array_length", [ints()], "cardinality(t0.ints)");
}

#[test]
fn test_editing() {
    assert_sql!(PG, "array_remove", [ints(), ArgumentExpr::integer(1)], "array_remove(t0.ints,1)");
    assert_sql!(
        PG,
        "array_remove_index",
        [ints(), ArgumentExpr::integer(2)],
        "case when t0.ints is not null then coalesce((select array_agg(t.val order by t.idx) from unnest(t0.ints) with ordinality t(val,idx) where t.idx is distinct from 2),cast(array[] as INTEGER[])) end"
    );
    assert_sql!(
        PG,
        "array_replace",
        [ints(), ArgumentExpr::integer(1), ArgumentExpr::integer(2)],
        "array_replace(t0.ints,1,2)"
    );
    assert_sql!(
        PG,
        "array_set",
        [ints(), ArgumentExpr::integer(2), ArgumentExpr::integer(9)],
        "array(select case when t.i=2 then 9 when t.i<=coalesce(cardinality(t0.ints),0) then t0.ints[t.i] end from generate_series(1,greatest(coalesce(cardinality(t0.ints),0),2)) t(i) order by t.i)"
    );
}

#[test]
fn test_sub_arrays() {
    assert_sql!(
        PG,
        "array_slice",
        [ints(), ArgumentExpr::integer(1), ArgumentExpr::integer(2)],
        "t0.ints[1:2]"
    );
    assert_sql!(PG, "array_trim", [ints(), ArgumentExpr::integer(1)], "trim_array(t0.ints,1)");
}

#[test]
fn test_sort() {
    assert_sql!(
        PG,
        "array_sort",
        [ints()],
        "case when t0.ints is not null then array(select t.val from unnest(t0.ints) with ordinality t(val,idx) order by t.val asc nulls last,t.idx) end"
    );
    assert_sql!(
        PG,
        "array_sort",
        [ints(), ArgumentExpr::boolean(true)],
        "case when t0.ints is not null then array(select t.val from unnest(t0.ints) with ordinality t(val,idx) order by t.val desc nulls first,t.idx) end"
    );
    assert_sql!(
        PG,
        "array_sort",
        [ints(), ArgumentExpr::boolean(false), ArgumentExpr::boolean(true)],
        "case when t0.ints is not null then array(select t.val from unnest(t0.ints) with ordinality t(val,idx) order by t.val asc nulls first,t.idx) end"
    );
}

#[test]
fn test_to_string() {
    assert_sql!(
        PG,
        "array_to_string",
        [ints(), ArgumentExpr::string(",")],
        "array_to_string(t0.ints,',')"
    );
    assert_sql!(
        PG,
        "array_to_string",
        [flags(), ArgumentExpr::string(","), ArgumentExpr::string("null")],
        "array_to_string(cast(t0.flags as VARCHAR[]),',','null')"
    );
}

#[test]
fn test_construction() {
    assert_sql!(
        PG,
        "array_concat",
        [ints(), other_ints()],
        "case when t0.ints is not null and t0.other_ints is not null then t0.ints||t0.other_ints end"
    );
    assert_sql!(
        PG,
        "array_append",
        [ints(), ArgumentExpr::integer(4)],
        "case when t0.ints is not null then array_append(t0.ints,4) end"
    );
    assert_sql!(
        PG,
        "array_append",
        [ints(), ArgumentExpr::null()],
        "case when t0.ints is not null then array_append(t0.ints,cast(NULL as INTEGER)) end"
    );
    assert_sql!(
        PG,
        "array_prepend",
        [ArgumentExpr::integer(4), ints()],
        "case when t0.ints is not null then array_prepend(4,t0.ints) end"
    );
    assert_sql!(PG, "array", [ArgumentExpr::integer(1), ArgumentExpr::integer(2)], "array[1,2]");
    assert_sql!(
        PG,
        "array",
        [ArgumentExpr::string("a"), ArgumentExpr::string("b")],
        "cast(array['a','b'] as VARCHAR[])"
    );
    assert_sql!(
        PG,
        "array_fill",
        [ArgumentExpr::integer(0), ArgumentExpr::integer(3)],
        "array_fill(0,array[greatest(3,0)])"
    );
    assert_sql!(
        PG,
        "array_agg",
        [ArgumentExpr::column("t0", "score", SqlType::integer())],
        "array_agg(t0.score)"
    );
}

#[test]
fn test_empty_constructor_uses_implied_type() {
    let implied = SqlType::array_of(DataType::Int64);
    let sql = render_with(PG, "array", &[], Some(&implied)).unwrap();
    assert_eq!(sql, "cast(array[] as BIGINT[])");

    assert_render_err!(PG, "array", [], FunctionError::Semantic { .. });
}

#[test]
fn test_gauss_emulates_trim() {
    let sql = render(Dialect::GaussDb, "array_trim", &[ints(), ArgumentExpr::integer(1)]).unwrap();
    assert_eq!(
        sql,
        "case when t0.ints is not null and 1 is not null then coalesce((select array_agg(t.val order by t.idx) from unnest(t0.ints) with ordinality t(val,idx) where t.idx<=cardinality(t0.ints)-1),cast(array[] as INTEGER[])) end"
    );
}
