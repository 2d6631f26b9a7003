//! Element lookup: position, positions, get and length.
//!
//! Positions are 1-based and compare elements null-safely, so `null` can be
//! searched for.

use super::emulation::{when_not_null, ElementRows};
use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStrategy {
    ArrayPosition,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionsStrategy {
    ArrayPositions,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetStrategy {
    Subscript,
    ArrayGet,
    Emulated(ElementRows),
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStrategy {
    Cardinality,
    Oracle,
}

pub fn render_position(
    strategy: &PositionStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let element = call.sql(1)?;
    let start = call.optional_sql(2)?;
    let start_arg = start.as_ref().map(|s| format!(",{}", s)).unwrap_or_default();

    Ok(match strategy {
        PositionStrategy::ArrayPosition => when_not_null(
            &[&array],
            &format!("coalesce(array_position({},{}{}),0)", array, element, start_arg),
        ),
        PositionStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let mut conditions = vec![ctx
                .dialect
                .null_safe_equality()
                .equal(&rows.element, &element)];
            if let Some(start) = &start {
                conditions.push(format!("{}>={}", rows.index, start));
            }
            when_not_null(
                &[&array],
                &format!(
                    "coalesce(({}),0)",
                    rows.select(&format!("min({})", rows.index), &conditions)
                ),
            )
        }
        PositionStrategy::Oracle => format!(
            "{}_position({},{}{})",
            call.collection_type(0)?,
            array,
            element,
            start_arg
        ),
    })
}

pub fn render_positions(
    strategy: &PositionsStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let element = call.sql(1)?;
    Ok(match strategy {
        PositionsStrategy::ArrayPositions => format!("array_positions({},{})", array, element),
        PositionsStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let matches = ctx.dialect.null_safe_equality().equal(&rows.element, &element);
            when_not_null(
                &[&array],
                &format!(
                    "coalesce(({}),array[])",
                    rows.aggregate(&rows.index, &[matches])
                ),
            )
        }
        PositionsStrategy::Oracle => format!(
            "{}_positions({},{})",
            call.collection_type(0)?,
            array,
            element
        ),
    })
}

pub fn render_get(strategy: &GetStrategy, call: &RenderCall<'_>) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let index = call.sql(1)?;
    Ok(match strategy {
        GetStrategy::Subscript => format!("{}[{}]", call.operand(0)?, index),
        GetStrategy::ArrayGet => format!("array_get({},{})", array, index),
        GetStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let at = format!("{}={}", rows.index, index);
            format!("({})", rows.select(&rows.element, &[at]))
        }
        GetStrategy::Oracle => format!("{}_get({},{})", call.collection_type(0)?, array, index),
    })
}

pub fn render_length(
    strategy: &LengthStrategy,
    call: &RenderCall<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    Ok(match strategy {
        LengthStrategy::Cardinality => format!("cardinality({})", array),
        LengthStrategy::Oracle => format!("{}_length({})", call.collection_type(0)?, array),
    })
}
