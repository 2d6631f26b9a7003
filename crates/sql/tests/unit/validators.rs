use crate::common::*;
use crate::fixtures::*;
use plural_sql::function::types::PluralType;

fn argument_index(err: &FunctionError) -> Option<usize> {
    match err {
        FunctionError::FunctionArgument { argument_index, .. } => *argument_index,
        _ => None,
    }
}

#[test]
fn test_wrong_arity_is_reported_before_rendering() {
    let err = render(Dialect::PostgreSql, "array_contains", &[ints()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Function array_contains() has 2 parameters, but 1 arguments given"
    );
    assert_eq!(argument_index(&err), None);

    let err = render(Dialect::H2, "array_concat", &[ints()]).unwrap_err();
    assert!(err.to_string().contains("at least 2 arguments"), "{}", err);
}

#[test]
fn test_non_array_argument() {
    let scalar = ArgumentExpr::column("t0", "score", SqlType::integer());
    let err = render(Dialect::PostgreSql, "array_length", &[scalar]).unwrap_err();
    assert_eq!(argument_index(&err), Some(0));
    assert!(err.to_string().contains("requires an array type"), "{}", err);
}

#[test]
fn test_nested_array_argument() {
    let nested = ArgumentExpr::column(
        "t0",
        "matrix",
        SqlType::Plural(PluralType::array(DataType::List(std::sync::Arc::new(
            arrow::datatypes::Field::new("item", DataType::Int32, true),
        )))),
    );
    let err = render(Dialect::PostgreSql, "array_length", &[nested]).unwrap_err();
    assert!(err.to_string().contains("array of basic values"), "{}", err);
}

#[test]
fn test_element_must_match_array() {
    let err = render(
        Dialect::PostgreSql,
        "array_contains",
        &[ints(), ArgumentExpr::string("x")],
    )
    .unwrap_err();
    assert_eq!(argument_index(&err), Some(1));
}

#[test]
fn test_unresolved_arguments_are_accepted() {
    assert!(render(
        Dialect::PostgreSql,
        "array_contains",
        &[ints(), ArgumentExpr::parameter()]
    )
    .is_ok());
    assert!(render(
        Dialect::PostgreSql,
        "array_length",
        &[ArgumentExpr::typed_parameter(int_array())]
    )
    .is_ok());
}

#[test]
fn test_arrays_must_share_element_type() {
    let err = render(Dialect::PostgreSql, "array_includes", &[ints(), names()]).unwrap_err();
    assert_eq!(argument_index(&err), Some(1));
    assert!(err.to_string().contains("requires an array type 'ARRAY<Int32>'"), "{}", err);
}

#[test]
fn test_constructor_rejects_mixed_elements() {
    let err = render(
        Dialect::PostgreSql,
        "array",
        &[ArgumentExpr::integer(1), ArgumentExpr::string("a")],
    )
    .unwrap_err();
    assert_eq!(argument_index(&err), Some(1));

    let err = render(Dialect::PostgreSql, "array", &[ints()]).unwrap_err();
    assert_eq!(argument_index(&err), Some(0));
}

#[test]
fn test_sort_flags_must_be_literals() {
    let err = render(
        Dialect::PostgreSql,
        "array_sort",
        &[ints(), ArgumentExpr::boolean(true), ArgumentExpr::parameter()],
    )
    .unwrap_err();
    assert_eq!(argument_index(&err), Some(2));
    assert!(err.to_string().contains("must be a boolean literal"));

    assert!(render(Dialect::PostgreSql, "array_sort", &[ints(), ArgumentExpr::null()]).is_ok());
}
