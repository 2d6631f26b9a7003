use super::emulation::{when_not_null, ElementRows};
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// `array(select .. from unnest(a) .. order by ..)`
    Unnest,
    /// HSQLDB `sort_array`
    SortArray,
    Emulated(ElementRows),
    Oracle,
}

/// Sort direction and null placement from the optional literal flags.
///
/// Nulls come first exactly when sorting descending, unless stated otherwise.
pub(crate) fn sort_flags(call: &RenderCall<'_>) -> (bool, bool) {
    let flag = |index: usize| call.args.get(index).and_then(|arg| arg.boolean_literal());
    let descending = flag(1).unwrap_or(false);
    let nulls_first = flag(2).unwrap_or(descending);
    (descending, nulls_first)
}

pub fn render_sort(
    strategy: &SortStrategy,
    call: &RenderCall<'_>,
) -> Result<String, FunctionError> {
    let array = call.sql(0)?;
    let (descending, nulls_first) = sort_flags(call);
    let order = format!(
        "{} nulls {}",
        if descending { "desc" } else { "asc" },
        if nulls_first { "first" } else { "last" }
    );

    Ok(match strategy {
        SortStrategy::Unnest => {
            let rows = ElementRows::Unnest.source(&array, "t");
            when_not_null(
                &[&array],
                &format!(
                    "array({} order by {} {},{})",
                    rows.select(&rows.element, &[]),
                    rows.element,
                    order,
                    rows.index
                ),
            )
        }
        SortStrategy::SortArray => format!("sort_array({} {})", array, order),
        SortStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let ordering = format!("{} {},{}", rows.element, order, rows.index);
            when_not_null(
                &[&array],
                &format!(
                    "coalesce((select array_agg({} order by {}) {}),array[])",
                    rows.element,
                    ordering,
                    rows.from_where(&[])
                ),
            )
        }
        SortStrategy::Oracle => format!(
            "{}_sort({},{},{})",
            call.collection_type(0)?,
            array,
            u8::from(descending),
            u8::from(nulls_first)
        ),
    })
}
