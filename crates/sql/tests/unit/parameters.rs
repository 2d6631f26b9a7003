use crate::common::*;
use crate::fixtures::*;
use plural_sql::ParameterSlot;

fn arguments(slots: &[ParameterSlot]) -> Vec<usize> {
    slots.iter().map(|slot| slot.argument).collect()
}

#[test]
fn test_guarded_slice_binds_each_placeholder() {
    let rendered = render_call(
        Dialect::HSql,
        "array_slice",
        &[ints(), ArgumentExpr::parameter(), ArgumentExpr::parameter()],
    )
    .unwrap();
    assert_eq!(placeholders(&rendered.sql), 4);
    assert_eq!(arguments(&rendered.parameters), vec![1, 2, 1, 2]);
    assert!(rendered.parameters.iter().all(|slot| slot.ordinal == 0));
}

#[test]
fn test_parameter_array_in_null_guard() {
    let rendered = render_call(
        Dialect::PostgreSql,
        "array_position",
        &[ArgumentExpr::typed_parameter(int_array()), ArgumentExpr::integer(1)],
    )
    .unwrap();
    assert_eq!(
        rendered.sql,
        "case when ? is not null then coalesce(array_position(?,1),0) end"
    );
    assert_eq!(arguments(&rendered.parameters), vec![0, 0]);
}

#[test]
fn test_trim_of_parameter_array() {
    let rendered = render_call(
        Dialect::CockroachDb,
        "array_trim",
        &[ArgumentExpr::typed_parameter(int_array()), ArgumentExpr::integer(1)],
    )
    .unwrap();
    assert_eq!(placeholders(&rendered.sql), rendered.parameters.len());
    assert!(rendered.parameters.len() >= 2);
    assert!(rendered.parameters.iter().all(|slot| slot.argument == 0));
}

#[test]
fn test_native_call_has_one_slot_per_parameter() {
    let rendered = render_call(
        Dialect::PostgreSql,
        "array_contains",
        &[ints(), ArgumentExpr::parameter()],
    )
    .unwrap();
    assert_eq!(rendered.sql, "t0.ints@>array[?]");
    assert_eq!(rendered.parameters, vec![ParameterSlot::new(1, 0)]);
}

#[test]
fn test_literals_record_no_slots() {
    let rendered = render_call(
        Dialect::H2,
        "array_to_string",
        &[ints(), ArgumentExpr::string("?")],
    )
    .unwrap();
    assert!(rendered.sql.contains("'?'"));
    assert!(rendered.parameters.is_empty());
}

#[test]
fn test_sequence_unnest_rejects_parameter_array() {
    let result = unnest(
        Dialect::H2,
        ArgumentExpr::typed_parameter(int_array()),
        &plural_sql::UnnestOptions::default(),
    );
    assert!(matches!(result, Err(FunctionError::UnsupportedConstruct { .. })));
}
