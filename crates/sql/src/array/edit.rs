//! Array editing: remove, remove_index, replace and set.
//!
//! A null array yields null. An array left without elements yields an empty
//! array, never null.

use super::emulation::{empty_array, when_not_null, ElementRows};
use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStrategy {
    ArrayRemove,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveIndexStrategy {
    /// `cast_empty` types the empty array literal, for dialects that cannot
    /// infer the type of `array[]`.
    Emulated { rows: ElementRows, cast_empty: bool },
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceStrategy {
    ArrayReplace,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetStrategy {
    GenerateSeries,
    /// Positions beyond `maximum_series_size` are silently dropped.
    SystemRange { maximum_series_size: u32 },
    SequenceArray,
    Oracle,
}

pub fn render_remove(
    strategy: &RemoveStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let element = call.sql(1)?;
    Ok(match strategy {
        RemoveStrategy::ArrayRemove => format!("array_remove({},{})", array, element),
        RemoveStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let keep = ctx.dialect.null_safe_equality().not_equal(&rows.element, &element);
            when_not_null(
                &[&array],
                &format!("coalesce(({}),array[])", rows.aggregate(&rows.element, &[keep])),
            )
        }
        RemoveStrategy::Oracle => {
            format!("{}_remove({},{})", call.collection_type(0)?, array, element)
        }
    })
}

pub fn render_remove_index(
    strategy: &RemoveIndexStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let index = call.sql(1)?;
    Ok(match strategy {
        RemoveIndexStrategy::Emulated { rows, cast_empty } => {
            let rows = rows.source(&array, "t");
            let keep = format!("{} is distinct from {}", rows.index, index);
            when_not_null(
                &[&array],
                &format!(
                    "coalesce(({}),{})",
                    rows.aggregate(&rows.element, &[keep]),
                    empty_array(*cast_empty, call, ctx)?
                ),
            )
        }
        RemoveIndexStrategy::Oracle => {
            format!("{}_remove_index({},{})", call.collection_type(0)?, array, index)
        }
    })
}

pub fn render_replace(
    strategy: &ReplaceStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let old = call.sql(1)?;
    let new = call.sql(2)?;
    Ok(match strategy {
        ReplaceStrategy::ArrayReplace => format!("array_replace({},{},{})", array, old, new),
        ReplaceStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let replaced = format!(
                "case when {} then {} else {} end",
                ctx.dialect.null_safe_equality().equal(&rows.element, &old),
                new,
                rows.element
            );
            when_not_null(
                &[&array],
                &format!("coalesce(({}),array[])", rows.aggregate(&replaced, &[])),
            )
        }
        ReplaceStrategy::Oracle => format!(
            "{}_replace({},{},{})",
            call.collection_type(0)?,
            array,
            old,
            new
        ),
    })
}

pub fn render_set(
    strategy: &SetStrategy,
    call: &RenderCall<'_>,
    _ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let operand = call.operand(0)?;
    let index = call.sql(1)?;
    let element = call.sql(2)?;
    let length = format!("coalesce(cardinality({}),0)", array);
    let bound = format!("greatest({},{})", length, index);

    Ok(match strategy {
        SetStrategy::GenerateSeries => format!(
            "array(select case when t.i={idx} then {e} when t.i<={len} then {a}[t.i] end from generate_series(1,{bound}) t(i) order by t.i)",
            idx = index,
            e = element,
            len = length,
            a = operand,
            bound = bound
        ),
        SetStrategy::SystemRange {
            maximum_series_size,
        } => format!(
            "coalesce((select array_agg(case when t.x={idx} then {e} else array_get({a},t.x) end order by t.x) from system_range(1,{max}) t where t.x<={bound}),array[])",
            idx = index,
            e = element,
            a = array,
            max = maximum_series_size,
            bound = bound
        ),
        SetStrategy::SequenceArray => format!(
            "coalesce((select array_agg(case when t.i={idx} then {e} when t.i<={len} then {a}[t.i] end order by t.i) from unnest(sequence_array(1,greatest({bound},1),1)) t(i) where t.i<={bound}),array[])",
            idx = index,
            e = element,
            len = length,
            a = operand,
            bound = bound
        ),
        SetStrategy::Oracle => format!(
            "{}_set({},{},{})",
            call.collection_type(0)?,
            array,
            index,
            element
        ),
    })
}
