use crate::common::*;
use crate::fixtures::*;
use plural_sql::function::context::InferenceContext;
use plural_sql::function::types::CollectionKind;
use plural_sql::DdlTypeRegistry;

fn resolve_return(
    dialect: Dialect,
    name: &str,
    args: &[ArgumentExpr],
    implied: Option<&SqlType>,
    ctx: impl FnOnce(InferenceContext<'_>) -> InferenceContext<'_>,
) -> Option<SqlType> {
    let registry = registry(dialect);
    let types = DdlTypeRegistry::new(dialect);
    let descriptor = registry.get(name).unwrap();
    descriptor.resolve_return_type(implied, args, &ctx(InferenceContext::new(&types)))
}

#[test]
fn test_element_type_flows_to_untyped_argument() {
    let registry = registry(Dialect::PostgreSql);
    let types = DdlTypeRegistry::new(Dialect::PostgreSql);
    let ctx = InferenceContext::new(&types);
    let descriptor = registry.get("array_contains").unwrap();

    let args = [ints(), ArgumentExpr::parameter()];
    assert_eq!(descriptor.resolve_argument_type(&args, 1, &ctx), Some(SqlType::integer()));
    // Typed arguments keep their own type
    assert_eq!(descriptor.resolve_argument_type(&args, 0, &ctx), None);

    let args = [ArgumentExpr::parameter(), ArgumentExpr::integer(3)];
    assert_eq!(
        descriptor.resolve_argument_type(&args, 0, &ctx),
        Some(SqlType::array_of(DataType::Int32))
    );
}

#[test]
fn test_concat_siblings() {
    let registry = registry(Dialect::H2);
    let types = DdlTypeRegistry::new(Dialect::H2);
    let ctx = InferenceContext::new(&types);
    let descriptor = registry.get("array_concat").unwrap();

    let args = [ArgumentExpr::parameter(), ArgumentExpr::parameter(), names()];
    assert_eq!(
        descriptor.resolve_argument_type(&args, 1, &ctx),
        Some(SqlType::array_of(DataType::Utf8))
    );
}

#[test]
fn test_return_type_precedence() {
    let inferred = SqlType::array_of(DataType::Int64);
    let implied = SqlType::array_of(DataType::Int16);
    let args = [ArgumentExpr::integer(1)];

    // Surrounding expression wins
    let ty = resolve_return(Dialect::PostgreSql, "array", &args, Some(&implied), |ctx| {
        ctx.with_inferred_type(inferred.clone())
    });
    assert_eq!(ty, Some(inferred.clone()));

    // Then the caller's implied type
    let ty = resolve_return(Dialect::PostgreSql, "array", &args, Some(&implied), |ctx| ctx);
    assert_eq!(ty, Some(implied));

    // Then the arguments
    let ty = resolve_return(Dialect::PostgreSql, "array", &args, None, |ctx| ctx);
    assert_eq!(ty, Some(SqlType::array_of(DataType::Int32)));
}

#[test]
fn test_array_via_element_defers_during_type_inference() {
    let args = [ArgumentExpr::integer(1), ArgumentExpr::integer(2)];
    let ty = resolve_return(Dialect::PostgreSql, "array_fill", &args, None, |ctx| {
        ctx.in_type_inference()
    });
    assert_eq!(ty, None);
}

#[test]
fn test_list_variants_return_lists() {
    let args = [ArgumentExpr::string("a"), ArgumentExpr::integer(2)];
    let ty = resolve_return(Dialect::PostgreSql, "array_fill_list", &args, None, |ctx| ctx);
    assert_eq!(
        ty.as_ref().and_then(SqlType::as_plural).map(|plural| plural.collection),
        Some(CollectionKind::List)
    );

    let ty = resolve_return(
        Dialect::PostgreSql,
        "array_positions_list",
        &[ints(), ArgumentExpr::integer(1)],
        None,
        |ctx| ctx,
    );
    assert_eq!(ty, Some(SqlType::list_of(DataType::Int32)));
}

#[test]
fn test_get_returns_element_type() {
    let ty = resolve_return(
        Dialect::HSql,
        "array_get",
        &[names(), ArgumentExpr::integer(1)],
        None,
        |ctx| ctx,
    );
    assert_eq!(ty, Some(SqlType::string()));
}

#[test]
fn test_rendered_call_carries_return_type() -> anyhow::Result<()> {
    let registry = registry(Dialect::PostgreSql);
    let types = DdlTypeRegistry::new(Dialect::PostgreSql);
    let mut diagnostics = plural_sql::Diagnostics::default();
    let mut ctx = plural_sql::RenderContext::new(Dialect::PostgreSql, &types, &mut diagnostics);

    let rendered = registry
        .get("array_slice")?
        .render_call(
            &[ints(), ArgumentExpr::integer(1), ArgumentExpr::integer(2)],
            None,
            &mut ctx,
        )?;
    assert_eq!(rendered.return_type, Some(int_array()));
    Ok(())
}
