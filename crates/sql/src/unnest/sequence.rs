//! Sequence joins for databases that have arrays but no way to unnest them.
//!
//! A fixed-size sequence of indexes is joined and restricted to the array's
//! length. Elements beyond the sequence size are silently dropped.

use super::{JoinStyle, TableSource, UnnestInput};
use crate::function::argument::ArgumentExpr;
use crate::function::error::FunctionError;
use crate::function::types::ArrayStorage;

/// The array expression is repeated in the join condition and the element
/// expressions, so it must not be a bind parameter.
fn require_reference(input: &UnnestInput<'_>) -> Result<(), FunctionError> {
    match input.arg {
        ArgumentExpr::Column(_) | ArgumentExpr::Literal { .. } => Ok(()),
        _ => Err(input.unsupported("argument must be a column reference")),
    }
}

fn sequence_join(
    input: &UnnestInput<'_>,
    from: String,
    length: String,
    element: impl Fn(&str, Option<&str>) -> Result<String, FunctionError>,
) -> Result<TableSource, FunctionError> {
    let index = format!("{}.x", input.alias);
    let columns = input.shape.project(
        |name, data_type| {
            let field = input.composite().then_some(name);
            let value = element(&index, field)?;
            match input.plural.storage {
                ArrayStorage::Json => {
                    Ok(json_scalar(&value, &input.types.map_type(data_type)?.to_string()))
                }
                _ => Ok(value),
            }
        },
        || index.clone(),
    )?;
    Ok(TableSource {
        cte: None,
        join: JoinStyle::Correlated,
        from,
        join_condition: Some(format!("{}<={}", index, length)),
        columns,
    })
}

/// Reads a JSON scalar as SQL text and casts it; JSON `null` becomes SQL null.
fn json_scalar(value: &str, ddl: &str) -> String {
    format!(
        "cast(stringdecode(regexp_replace(nullif({},JSON'null'),'^\"(.*)\"$','$1')) as {})",
        value, ddl
    )
}

fn system_range_from(input: &UnnestInput<'_>, maximum_array_size: u32) -> String {
    format!("system_range(1,{}) {}", maximum_array_size, input.alias)
}

/// H2 `system_range`
pub(crate) fn system_range(
    input: &UnnestInput<'_>,
    maximum_array_size: u32,
) -> Result<TableSource, FunctionError> {
    require_reference(input)?;
    sequence_join(
        input,
        system_range_from(input, maximum_array_size),
        format!("coalesce(cardinality({}),0)", input.array),
        |index, field| {
            let element = format!("array_get({},{})", input.array, index);
            Ok(match field {
                Some(name) => format!("({}).{}", element, name),
                None => element,
            })
        },
    )
}

/// H2 JSON arrays: `array_get`/`array_length` also work on JSON arrays.
pub(crate) fn json_system_range(
    input: &UnnestInput<'_>,
    maximum_array_size: u32,
) -> Result<TableSource, FunctionError> {
    require_reference(input)?;
    sequence_join(
        input,
        system_range_from(input, maximum_array_size),
        format!("coalesce(array_length({}),0)", input.array),
        |index, field| {
            let element = format!("array_get({},{})", input.array, index);
            Ok(match field {
                Some(name) => format!("({}).\"{}\"", element, name),
                None => element,
            })
        },
    )
}

/// DB2 XQuery range expression
pub(crate) fn xquery_range(
    input: &UnnestInput<'_>,
    maximum_array_size: u32,
) -> Result<TableSource, FunctionError> {
    require_reference(input)?;
    if input.composite() {
        return Err(input.unsupported("arrays of composite elements are not supported"));
    }
    sequence_join(
        input,
        format!(
            "xmltable('1 to {}' columns x integer path '.') {}",
            maximum_array_size, input.alias
        ),
        format!("coalesce(cardinality({}),0)", input.array),
        |index, _| Ok(format!("{}[{}]", input.array, index)),
    )
}
