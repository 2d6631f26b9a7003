//! Arrays stored as `<Collection><e>..</e></Collection>` documents.

use super::{JoinStyle, TableSource, UnnestInput};
use crate::dialects::Dialect;
use crate::function::error::FunctionError;

pub(crate) const ELEMENTS_PATH: &str = "/Collection/e";

pub(crate) fn element_path(input: &UnnestInput<'_>, name: &str) -> String {
    if input.composite() {
        name.to_string()
    } else {
        ".".to_string()
    }
}

pub(crate) fn xmltable(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let definitions = input
        .shape
        .column_definitions(input.types, |name| element_path(input, name))?;
    let (from, join) = match input.dialect {
        Dialect::Db2 => (
            format!(
                "xmltable('$d{}' passing {} as \"d\" columns {}) {}",
                ELEMENTS_PATH, input.array, definitions, input.alias
            ),
            JoinStyle::Correlated,
        ),
        Dialect::PostgreSql => (
            format!(
                "xmltable('{}' passing {} columns {}) {}",
                ELEMENTS_PATH, input.array, definitions, input.alias
            ),
            JoinStyle::Lateral,
        ),
        _ => (
            format!(
                "xmltable('{}' passing {} columns {}) {}",
                ELEMENTS_PATH, input.array, definitions, input.alias
            ),
            JoinStyle::Correlated,
        ),
    };
    Ok(TableSource {
        cte: None,
        join,
        from,
        join_condition: None,
        columns: input.shape.qualified(input.alias),
    })
}
