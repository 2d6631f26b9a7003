//! Arrays stored as JSON documents.

use super::{JoinStyle, TableSource, UnnestInput};
use crate::function::error::FunctionError;

pub(crate) fn jsonb_array_elements(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let alias = input.alias;
    let columns = input.shape.project(
        |name, data_type| {
            let ddl = input.types.map_type(data_type)?;
            Ok(if input.composite() {
                format!("cast({}.value->>'{}' as {})", alias, name, ddl)
            } else {
                format!("cast({}.value#>>'{{}}' as {})", alias, ddl)
            })
        },
        || format!("{}.ordinality", alias),
    )?;
    Ok(TableSource {
        cte: None,
        join: JoinStyle::Lateral,
        from: format!(
            "jsonb_array_elements({}) with ordinality {}(value,ordinality)",
            input.array, alias
        ),
        join_condition: None,
        columns,
    })
}

/// Path of a column within one array element.
pub(crate) fn element_path(input: &UnnestInput<'_>, name: &str) -> String {
    if input.composite() {
        format!("$.{}", name)
    } else {
        "$".to_string()
    }
}

/// Oracle and DB2 `json_table`, which may reference preceding tables.
pub(crate) fn json_table(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let definitions = input
        .shape
        .column_definitions(input.types, |name| element_path(input, name))?;
    Ok(TableSource {
        cte: None,
        join: JoinStyle::Correlated,
        from: format!(
            "json_table({},'$[*]' columns({})) {}",
            input.array, definitions, input.alias
        ),
        join_condition: None,
        columns: input.shape.qualified(input.alias),
    })
}

/// SQL Server `openjson`
pub(crate) fn openjson(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let alias = input.alias;
    let columns = input.shape.project(
        |name, data_type| {
            let ddl = input.types.map_type(data_type)?;
            Ok(if input.composite() {
                format!("cast(json_value({}.value,'$.{}') as {})", alias, name, ddl)
            } else {
                format!("cast({}.value as {})", alias, ddl)
            })
        },
        || format!("cast({}.[key] as int)+1", alias),
    )?;
    Ok(TableSource {
        cte: None,
        join: JoinStyle::CrossApply,
        from: format!("openjson({}) {}", input.array, alias),
        join_condition: None,
        columns,
    })
}
