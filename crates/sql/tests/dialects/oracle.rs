use crate::common::*;
use crate::fixtures::*;
use plural_sql::function::types::PluralType;

const ORACLE: Dialect = Dialect::Oracle;

#[test]
fn test_generated_collection_functions() {
    assert_sql!(
        ORACLE,
        "array_contains",
        [ints(), ArgumentExpr::integer(1)],
        "IntegerArray_contains(t0.ints,1,0)>0"
    );
    assert_sql!(
        ORACLE,
        "array_contains_nullable",
        [ints(), ArgumentExpr::null()],
        "IntegerArray_contains(t0.ints,NULL,1)>0"
    );
    assert_sql!(
        ORACLE,
        "array_includes",
        [ints(), other_ints()],
        "IntegerArray_includes(t0.ints,t0.other_ints,0)>0"
    );
    assert_sql!(
        ORACLE,
        "array_position",
        [ints(), ArgumentExpr::integer(1)],
        "IntegerArray_position(t0.ints,1)"
    );
    assert_sql!(ORACLE, "array_length", [ints()], "IntegerArray_length(t0.ints)");
    assert_sql!(
        ORACLE,
        "array_sort",
        [ints(), ArgumentExpr::boolean(true)],
        "IntegerArray_sort(t0.ints,1,1)"
    );
    assert_sql!(
        ORACLE,
        "array_to_string",
        [names(), ArgumentExpr::string(",")],
        "StringArray_to_string(t0.names,',')"
    );
}

#[test]
fn test_named_collection_type() {
    let typed = ArgumentExpr::column(
        "t0",
        "ints",
        SqlType::Plural(PluralType::array(DataType::Int32).with_type_name("INT_TAB")),
    );
    assert_sql!(ORACLE, "array_length", [typed], "INT_TAB_length(t0.ints)");
}

#[test]
fn test_construction_uses_return_type() {
    assert_sql!(
        ORACLE,
        "array",
        [ArgumentExpr::integer(1), ArgumentExpr::integer(2)],
        "IntegerArray(1,2)"
    );
    assert_sql!(
        ORACLE,
        "array_fill",
        [ArgumentExpr::integer(0), ArgumentExpr::integer(3)],
        "IntegerArray_fill(0,3)"
    );
    assert_sql!(
        ORACLE,
        "array_agg",
        [ArgumentExpr::column("t0", "score", SqlType::integer())],
        "cast(collect(t0.score) as IntegerArray)"
    );

    let implied = SqlType::array_of(DataType::Utf8);
    assert_eq!(render_with(ORACLE, "array", &[], Some(&implied)).unwrap(), "StringArray()");
}

#[test]
fn test_untyped_fill_needs_implied_type() {
    assert_render_err!(
        ORACLE,
        "array_fill",
        [ArgumentExpr::null(), ArgumentExpr::integer(3)],
        FunctionError::Semantic { .. }
    );

    let implied = SqlType::array_of(DataType::Int32);
    let sql = render_with(
        ORACLE,
        "array_fill",
        &[ArgumentExpr::null(), ArgumentExpr::integer(3)],
        Some(&implied),
    )
    .unwrap();
    assert_eq!(sql, "IntegerArray_fill(cast(NULL as number(10,0)),3)");
}
