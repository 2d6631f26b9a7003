//! Array construction: constructor, fill, concatenation and aggregation.

use super::emulation::when_not_null;
use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;
use crate::function::types::SqlType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorStrategy {
    /// `array[..]`. With `typed`, string literals and empty arrays get a cast
    /// to the declared array type, since PostgreSQL would otherwise pick `text[]`.
    Bracket { typed: bool },
    /// `<CollectionType>(..)`
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    ArrayFill,
    GenerateSeries,
    SystemRange,
    SequenceArray,
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStrategy {
    /// `||` guarded against null operands, which PostgreSQL would skip
    NullSafeOperator,
    Operator,
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatElementStrategy {
    ArrayAppend,
    Operator,
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateStrategy {
    ArrayAgg,
    /// `cast(collect(..) as <CollectionType>)`
    Oracle,
}

fn all_sql(call: &RenderCall<'_>) -> Result<Vec<String>, FunctionError> {
    (0..call.args.len()).map(|index| call.sql(index)).collect()
}

pub fn render_constructor(
    strategy: &ConstructorStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let elements = all_sql(call)?.join(",");
    match strategy {
        ConstructorStrategy::Bracket { typed } => {
            let literal = format!("array[{}]", elements);
            let needs_cast =
                call.args.is_empty() || call.args.iter().any(|arg| arg.is_string_literal());
            if *typed && needs_cast {
                Ok(format!("cast({} as {})", literal, call.return_cast_target(ctx)?))
            } else {
                Ok(literal)
            }
        }
        ConstructorStrategy::Oracle => {
            Ok(format!("{}({})", call.return_collection_type()?, elements))
        }
    }
}

pub fn render_fill(
    strategy: &FillStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let element_type = call
        .return_type
        .and_then(SqlType::as_plural)
        .map(|plural| SqlType::Basic(plural.element.clone()));
    let element = call.typed_sql(0, element_type.as_ref(), ctx)?;
    let count = call.sql(1)?;

    Ok(match strategy {
        FillStrategy::ArrayFill => format!("array_fill({},array[greatest({},0)])", element, count),
        FillStrategy::GenerateSeries => format!(
            "coalesce((select array_agg({}) from generate_series(1,{})),cast(array[] as {}))",
            element,
            count,
            call.return_cast_target(ctx)?
        ),
        FillStrategy::SystemRange => format!(
            "coalesce((select array_agg({}) from system_range(1,{})),array[])",
            element, count
        ),
        FillStrategy::SequenceArray => format!(
            "coalesce((select array_agg({e}) from unnest(sequence_array(1,greatest({n},1),1)) t(i) where t.i<={n}),array[])",
            e = element,
            n = count
        ),
        FillStrategy::Oracle => {
            format!("{}_fill({},{})", call.return_collection_type()?, element, count)
        }
    })
}

pub fn render_concat(
    strategy: &ConcatStrategy,
    call: &RenderCall<'_>,
) -> Result<String, FunctionError> {
    let operands = (0..call.args.len())
        .map(|index| call.operand(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(match strategy {
        ConcatStrategy::NullSafeOperator => {
            let guarded: Vec<&str> = operands.iter().map(String::as_str).collect();
            when_not_null(&guarded, &operands.join("||"))
        }
        ConcatStrategy::Operator => format!("({})", operands.join("||")),
        ConcatStrategy::Oracle => format!(
            "{}_concat({})",
            call.collection_type(0)?,
            all_sql(call)?.join(",")
        ),
    })
}

pub fn render_concat_element(
    strategy: &ConcatElementStrategy,
    prepend: bool,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let (array_index, element_index) = if prepend { (1, 0) } else { (0, 1) };
    let array = call.sql(array_index)?;
    let element = call.typed_sql(element_index, call.element_of(array_index).as_ref(), ctx)?;

    Ok(match (strategy, prepend) {
        (ConcatElementStrategy::ArrayAppend, false) => {
            when_not_null(&[&array], &format!("array_append({},{})", array, element))
        }
        (ConcatElementStrategy::ArrayAppend, true) => {
            when_not_null(&[&array], &format!("array_prepend({},{})", element, array))
        }
        (ConcatElementStrategy::Operator, false) => {
            format!("({}||array[{}])", call.operand(array_index)?, element)
        }
        (ConcatElementStrategy::Operator, true) => {
            format!("(array[{}]||{})", element, call.operand(array_index)?)
        }
        (ConcatElementStrategy::Oracle, false) => format!(
            "{}_append({},{})",
            call.collection_type(array_index)?,
            array,
            element
        ),
        (ConcatElementStrategy::Oracle, true) => format!(
            "{}_prepend({},{})",
            call.collection_type(array_index)?,
            element,
            array
        ),
    })
}

pub fn render_aggregate(
    strategy: &AggregateStrategy,
    call: &RenderCall<'_>,
) -> Result<String, FunctionError> {
    let element = call.sql(0)?;
    Ok(match strategy {
        AggregateStrategy::ArrayAgg => format!("array_agg({})", element),
        AggregateStrategy::Oracle => format!(
            "cast(collect({}) as {})",
            element,
            call.return_collection_type()?
        ),
    })
}
