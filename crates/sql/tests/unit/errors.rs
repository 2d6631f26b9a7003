use crate::common::*;
use crate::fixtures::*;
use plural_common::config::ArrayFunctionSettings;
use plural_error::ErrorCode;

#[test]
fn test_unknown_function_lists_available() {
    let registry = registry(Dialect::PostgreSql);
    let err = registry.get("array_contain").unwrap_err();
    match &err {
        FunctionError::UnknownFunction { available, .. } => {
            assert!(available.contains(&"array_contains".to_string()));
        }
        other => panic!("unexpected error {:?}", other),
    }

    let plural = err.to_plural_error("PostgreSQL");
    assert_eq!(plural.code, ErrorCode::UnknownFunction);
    assert_eq!(plural.hint.as_deref(), Some("Did you mean 'array_contains'?"));
}

#[test]
fn test_registry_lookup_ignores_case() {
    let registry = registry(Dialect::H2);
    assert!(registry.has_function("ARRAY_CONTAINS"));
    assert!(registry.find("Array_Slice").is_some());
}

#[test]
fn test_dialects_without_array_functions() {
    for dialect in [Dialect::Db2, Dialect::SqlServer, Dialect::Sybase, Dialect::Hana] {
        let registry = registry(dialect);
        assert!(registry.is_empty(), "{}", dialect);
        assert!(!dialect.supports_array_functions());
        assert!(registry.unnest().is_ok(), "{}", dialect);
    }
}

#[test]
fn test_describe_catalog() {
    let catalog = registry(Dialect::Oracle).describe();
    assert_eq!(catalog["dialect"], "Oracle");
    assert_eq!(catalog["unnest"], true);
    let functions = catalog["functions"].as_array().unwrap();
    assert_eq!(functions.len(), registry(Dialect::Oracle).len());
    assert!(functions
        .iter()
        .any(|f| f["name"] == "array_position"
            && f["signature"] == "(ARRAY array, OBJECT element[, INTEGER startPosition])"));
}

#[test]
fn test_unsupported_construct_conversion() {
    let err = render(
        Dialect::HSql,
        "array_to_string",
        &[ints(), ArgumentExpr::parameter()],
    )
    .unwrap_err();
    let plural = err.to_plural_error("HSQLDB");
    assert_eq!(plural.code, ErrorCode::UnsupportedConstruct);
    assert!(plural.message.contains("HSQLDB"), "{}", plural.message);
}

#[test]
fn test_registry_for_routes_names() -> anyhow::Result<()> {
    let settings = ArrayFunctionSettings::default();
    assert_eq!(plural_sql::registry_for("cockroachdb", &settings)?.dialect(), Dialect::CockroachDb);
    assert_eq!(plural_sql::registry_for("saphana", &settings)?.dialect(), Dialect::Hana);

    let err = plural_sql::registry_for("postgress", &settings).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownDialect);
    assert_eq!(err.hint.as_deref(), Some("Did you mean 'postgres'?"));
    Ok(())
}

#[test]
fn test_injection_in_identifiers_is_rejected() {
    let column = ArgumentExpr::column("t0", "ints; drop table x", int_array());
    let err = render(Dialect::PostgreSql, "array_length", &[column]).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidIdentifier(_)));
}
