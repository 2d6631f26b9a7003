use super::emulation::{when_not_null, ElementRows};
use crate::function::context::RenderContext;
use crate::function::ddl::cast_target;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;
use crate::function::types::SqlType;
use arrow::datatypes::DataType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToStringStrategy {
    ArrayToString,
    /// `listagg` over element rows
    Emulated(ElementRows),
    /// HSQLDB `group_concat`, which needs a literal separator
    GroupConcat,
    Oracle,
}

pub fn render_to_string(
    strategy: &ToStringStrategy,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let separator = call.sql(1)?;
    let default = call.optional_sql(2)?;
    let boolean = call
        .plural(0)
        .is_some_and(|plural| plural.element == DataType::Boolean);
    let varchar = cast_target(ctx.types, &SqlType::string())?;

    // Booleans render as lowercase `true`/`false` everywhere
    let element_text = |element: &str| {
        let text = if boolean {
            format!("lower(cast({} as {}))", element, varchar)
        } else {
            format!("cast({} as {})", element, varchar)
        };
        match &default {
            Some(default) => format!("coalesce({},{})", text, default),
            None => text,
        }
    };

    Ok(match strategy {
        ToStringStrategy::ArrayToString => {
            let source = if boolean {
                let varchar_array = cast_target(ctx.types, &SqlType::array_of(DataType::Utf8))?;
                format!("cast({} as {})", array, varchar_array)
            } else {
                array.clone()
            };
            match &default {
                Some(default) => format!("array_to_string({},{},{})", source, separator, default),
                None => format!("array_to_string({},{})", source, separator),
            }
        }
        ToStringStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            when_not_null(
                &[&array],
                &format!(
                    "coalesce((select listagg({},{}) within group (order by {}) {}),'')",
                    element_text(&rows.element),
                    separator,
                    rows.index,
                    rows.from_where(&[])
                ),
            )
        }
        ToStringStrategy::GroupConcat => {
            if !call.arg(1)?.is_string_literal() {
                return Err(call.unsupported(ctx, "the separator must be a string literal"));
            }
            let rows = ElementRows::Unnest.source(&array, "t");
            when_not_null(
                &[&array],
                &format!(
                    "coalesce((select group_concat({} order by {} separator {}) {}),'')",
                    element_text(&rows.element),
                    rows.index,
                    separator,
                    rows.from_where(&[])
                ),
            )
        }
        ToStringStrategy::Oracle => match &default {
            Some(default) => format!(
                "{}_to_string({},{},{})",
                call.collection_type(0)?,
                array,
                separator,
                default
            ),
            None => format!("{}_to_string({},{})", call.collection_type(0)?, array, separator),
        },
    })
}
