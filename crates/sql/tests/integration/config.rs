use crate::common::reference;
use crate::common::*;
use crate::fixtures::*;
use plural_common::config::AppConfig;
use plural_sql::{registry_for, DdlTypeRegistry, Diagnostics, RenderContext};

const CONFIG: &str = r#"
array_functions:
  maximum_array_size: 64
  maximum_series_size: 128
"#;

#[test]
fn test_configured_sizes_reach_emulations() -> anyhow::Result<()> {
    let config = AppConfig::from_yaml(CONFIG)?;
    let settings = config.array_functions;
    let registry = registry_for("h2", &settings)?;
    let types = DdlTypeRegistry::new(Dialect::H2);
    let mut diagnostics = Diagnostics::default();
    let mut ctx = RenderContext::new(Dialect::H2, &types, &mut diagnostics).with_settings(settings);

    let contains = registry
        .get("array_contains")?
        .render_call(&[ints(), ArgumentExpr::integer(1)], None, &mut ctx)?;
    assert!(contains.sql.contains("system_range(1,64) t"), "{}", contains.sql);

    let set = registry.get("array_set")?.render_call(
        &[ints(), ArgumentExpr::integer(3), ArgumentExpr::integer(1)],
        None,
        &mut ctx,
    )?;
    assert!(set.sql.contains("system_range(1,128) t"), "{}", set.sql);
    Ok(())
}

#[test]
fn test_truncation_boundary_in_unnest() -> anyhow::Result<()> {
    let settings = AppConfig::from_yaml(CONFIG)?.array_functions;
    let options = plural_sql::UnnestOptions::default();
    let source = unnest_with(Dialect::H2, settings, ints(), &options)?;
    assert_eq!(source.from, "system_range(1,64) t");
    assert_eq!(
        source.join_condition.as_deref(),
        Some("t.x<=coalesce(cardinality(t0.ints),0)")
    );
    let bound = sequence_bound(&source.from).expect("bounded sequence");
    assert_eq!(bound, 64);

    // Rows past the bound are dropped, shorter arrays come back whole
    let long: Vec<reference::Element> = (1..=100).map(Some).collect();
    assert_eq!(reference::sequence_join(&Some(long.clone()), bound), long[..64].to_vec());
    let short: Vec<reference::Element> = (1..=10).map(Some).collect();
    assert_eq!(reference::sequence_join(&Some(short.clone()), bound), short);
    assert!(reference::sequence_join(&None, bound).is_empty());

    let source = unnest_with(Dialect::Db2, settings, ints(), &options)?;
    assert_eq!(source.from, "xmltable('1 to 64' columns x integer path '.') t");
    assert_eq!(sequence_bound(&source.from), Some(64));
    Ok(())
}

#[test]
fn test_invalid_sizes_are_rejected() {
    assert!(AppConfig::from_yaml("array_functions:\n  maximum_array_size: 0\n").is_err());
}
