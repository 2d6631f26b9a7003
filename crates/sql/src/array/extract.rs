//! Sub-arrays: slice and trim.

use super::emulation::{empty_array, when_not_null, ElementRows};
use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceStrategy {
    /// `a[start:end]`
    Subscript,
    ArraySlice,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStrategy {
    TrimArray,
    Emulated { rows: ElementRows, cast_empty: bool },
    Oracle,
}

pub fn render_slice(
    strategy: &SliceStrategy,
    call: &RenderCall<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let start = call.sql(1)?;
    let end = call.sql(2)?;
    Ok(match strategy {
        SliceStrategy::Subscript => format!("{}[{}:{}]", call.operand(0)?, start, end),
        SliceStrategy::ArraySlice => format!("array_slice({},{},{})", array, start, end),
        SliceStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let within = format!("{} between {} and {}", rows.index, start, end);
            when_not_null(
                &[&array, &start, &end],
                &format!("coalesce(({}),array[])", rows.aggregate(&rows.element, &[within])),
            )
        }
        SliceStrategy::Oracle => format!(
            "{}_slice({},{},{})",
            call.collection_type(0)?,
            array,
            start,
            end
        ),
    })
}

pub fn render_trim(
    strategy: &TrimStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let count = call.sql(1)?;
    Ok(match strategy {
        TrimStrategy::TrimArray => format!("trim_array({},{})", array, count),
        TrimStrategy::Emulated { rows, cast_empty } => {
            let rows = rows.source(&array, "t");
            let kept = format!("{}<=cardinality({})-{}", rows.index, array, count);
            when_not_null(
                &[&array, &count],
                &format!(
                    "coalesce(({}),{})",
                    rows.aggregate(&rows.element, &[kept]),
                    empty_array(*cast_empty, call, ctx)?
                ),
            )
        }
        TrimStrategy::Oracle => format!("{}_trim({},{})", call.collection_type(0)?, array, count),
    })
}
