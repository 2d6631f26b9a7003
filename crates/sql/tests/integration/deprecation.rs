use crate::common::*;
use crate::fixtures::*;
use plural_common::config::ArrayFunctionSettings;
use plural_sql::{CallSite, DdlTypeRegistry, Diagnostics, RenderContext};

fn contains_array(
    dialect: Dialect,
    diagnostics: &mut Diagnostics,
    site: &str,
    settings: ArrayFunctionSettings,
) -> anyhow::Result<String> {
    let registry = registry(dialect);
    let types = DdlTypeRegistry::new(dialect);
    let mut ctx = RenderContext::new(dialect, &types, diagnostics)
        .at(CallSite::new(site))
        .with_settings(settings);
    let rendered = registry
        .get("array_contains")?
        .render_call(&[ints(), other_ints()], None, &mut ctx)?;
    Ok(rendered.sql)
}

#[test]
fn test_array_needle_renders_as_includes() -> anyhow::Result<()> {
    let mut diagnostics = Diagnostics::default();
    let sql = contains_array(
        Dialect::PostgreSql,
        &mut diagnostics,
        "q1:1",
        ArrayFunctionSettings::default(),
    )?;
    assert_eq!(sql, render(Dialect::PostgreSql, "array_includes", &[ints(), other_ints()])?);
    assert_eq!(diagnostics.warnings().len(), 1);
    assert!(diagnostics.warnings()[0].contains("array_includes"));
    Ok(())
}

#[test]
fn test_warns_once_per_call_site() -> anyhow::Result<()> {
    let mut diagnostics = Diagnostics::default();
    let settings = ArrayFunctionSettings::default();
    contains_array(Dialect::H2, &mut diagnostics, "q1:1", settings)?;
    contains_array(Dialect::H2, &mut diagnostics, "q1:1", settings)?;
    contains_array(Dialect::H2, &mut diagnostics, "q2:7", settings)?;
    assert_eq!(diagnostics.warnings().len(), 2);
    Ok(())
}

#[test]
fn test_warning_can_be_disabled() -> anyhow::Result<()> {
    let mut diagnostics = Diagnostics::default();
    let settings = ArrayFunctionSettings {
        warn_on_deprecated_overloads: false,
        ..ArrayFunctionSettings::default()
    };
    let sql = contains_array(Dialect::Oracle, &mut diagnostics, "q1:1", settings)?;
    assert_eq!(sql, "IntegerArray_includes(t0.ints,t0.other_ints,0)>0");
    assert!(diagnostics.warnings().is_empty());
    Ok(())
}
