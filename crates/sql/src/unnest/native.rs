//! Databases with native array types and a row-producing function for them.

use super::{JoinStyle, TableSource, UnnestInput};
use crate::dialects::Dialect;
use crate::function::error::FunctionError;

/// `unnest(a) [with ordinality] t(..)` (PostgreSQL family, HSQLDB)
pub(crate) fn unnest(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    if input.composite() && input.dialect == Dialect::HSql {
        return Err(input.unsupported("arrays of composite elements are not supported"));
    }
    let mut names: Vec<&str> = input.shape.columns.iter().map(|(name, _)| name.as_str()).collect();
    let from = match &input.shape.ordinality {
        Some(ordinality) => {
            names.push(ordinality);
            format!(
                "unnest({}) with ordinality {}({})",
                input.array,
                input.alias,
                names.join(",")
            )
        }
        None => format!("unnest({}) {}({})", input.array, input.alias, names.join(",")),
    };
    Ok(TableSource {
        cte: None,
        join: JoinStyle::Lateral,
        from,
        join_condition: None,
        columns: input.shape.qualified(input.alias),
    })
}

/// `table(a)` over an Oracle collection, wrapped to name the columns and
/// number the rows.
pub(crate) fn oracle_table(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let inner = format!("{}_i", input.alias);
    let mut projections: Vec<String> = input
        .shape
        .columns
        .iter()
        .map(|(name, _)| {
            if input.composite() {
                format!("{}.{} {}", inner, name, name)
            } else {
                format!("{}.column_value {}", inner, name)
            }
        })
        .collect();
    if let Some(ordinality) = &input.shape.ordinality {
        projections.push(format!("rownum {}", ordinality));
    }
    Ok(TableSource {
        cte: None,
        join: JoinStyle::Lateral,
        from: format!(
            "(select {} from table({}) {}) {}",
            projections.join(","),
            input.array,
            inner,
            input.alias
        ),
        join_condition: None,
        columns: input.shape.qualified(input.alias),
    })
}
