//! SAP HANA.
//!
//! HANA's `json_table`/`xmltable` cannot reference a preceding table, but they
//! can scan a table column. A CTE renders one document per base row holding
//! the row's key and its array; the table function scans the CTE and the
//! result joins back to the base row on the key.

use super::json::element_path as json_element_path;
use super::xml::{element_path as xml_element_path, ELEMENTS_PATH};
use super::{CommonTableExpression, JoinStyle, TableSource, UnnestInput};
use crate::function::argument::{ColumnRef, KeyColumn, TableGroup};
use crate::function::error::FunctionError;
use crate::function::sanitize::validate_identifier;
use arrow::datatypes::DataType;

fn table_group<'a>(input: &UnnestInput<'a>) -> Result<&'a TableGroup, FunctionError> {
    let group = input
        .arg
        .as_column()
        .and_then(|column| column.table.as_ref())
        .filter(|group| !group.key_columns.is_empty())
        .ok_or_else(|| {
            input.unsupported("the array argument must be a column of a table with a primary key")
        })?;
    validate_identifier(&group.table_name)?;
    validate_identifier(&group.alias)?;
    for key in &group.key_columns {
        validate_identifier(&key.name)?;
    }
    Ok(group)
}

/// The array column as read by the CTE, which scans the base table under the
/// group's alias.
fn document_array(input: &UnnestInput<'_>, group: &TableGroup) -> Result<String, FunctionError> {
    let column = input
        .arg
        .as_column()
        .ok_or_else(|| input.unsupported("argument must be a column reference"))?;
    ColumnRef {
        qualifier: Some(group.alias.clone()),
        ..column.clone()
    }
    .to_sql()
}

fn is_numeric(data_type: &DataType) -> bool {
    data_type.is_integer()
        || data_type.is_floating()
        || matches!(data_type, DataType::Decimal128(_, _))
}

fn json_key(alias: &str, key: &KeyColumn) -> String {
    let value = format!("to_nvarchar({}.{})", alias, key.name);
    if is_numeric(&key.data_type) {
        value
    } else {
        format!(
            "'\"'||replace(replace({},'\\','\\\\'),'\"','\\\"')||'\"'",
            value
        )
    }
}

fn xml_key(alias: &str, key: &KeyColumn) -> String {
    format!(
        "replace(replace(to_nvarchar({}.{}),'&','&amp;'),'<','&lt;')",
        alias, key.name
    )
}

fn cte_name(input: &UnnestInput<'_>) -> String {
    format!("{}_doc", input.alias)
}

fn key_condition(input: &UnnestInput<'_>, group: &TableGroup) -> String {
    group
        .key_columns
        .iter()
        .enumerate()
        .map(|(i, key)| format!("{}.k{}={}.{}", input.alias, i, group.alias, key.name))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn key_definitions(
    input: &UnnestInput<'_>,
    group: &TableGroup,
    path: impl Fn(usize) -> String,
) -> Result<Vec<String>, FunctionError> {
    group
        .key_columns
        .iter()
        .enumerate()
        .map(|(i, key)| {
            Ok(format!(
                "k{} {} path '{}'",
                i,
                input.types.map_type(&key.data_type)?,
                path(i)
            ))
        })
        .collect()
}

pub(crate) fn json_table(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let group = table_group(input)?;
    let name = cte_name(input);

    let mut document = Vec::new();
    for (i, key) in group.key_columns.iter().enumerate() {
        let prefix = if i == 0 { "{" } else { "," };
        document.push(format!("'{}\"k{}\":'", prefix, i));
        document.push(json_key(&group.alias, key));
    }
    document.push("',\"v\":'".to_string());
    document.push(format!("coalesce({},'[]')", document_array(input, group)?));
    document.push("'}'".to_string());

    let cte = CommonTableExpression {
        sql: format!(
            "select {} doc from {} {}",
            document.join("||"),
            group.table_name,
            group.alias
        ),
        name: name.clone(),
    };

    let mut definitions = key_definitions(input, group, |i| format!("$.k{}", i))?;
    definitions.push(format!(
        "nested path '$.v[*]' columns({})",
        input
            .shape
            .column_definitions(input.types, |column| json_element_path(input, column))?
    ));

    Ok(TableSource {
        cte: Some(cte),
        join: JoinStyle::Correlated,
        from: format!(
            "json_table({}.doc,'$' columns({})) {}",
            name,
            definitions.join(","),
            input.alias
        ),
        join_condition: Some(key_condition(input, group)),
        columns: input.shape.qualified(input.alias),
    })
}

pub(crate) fn xmltable(input: &UnnestInput<'_>) -> Result<TableSource, FunctionError> {
    let group = table_group(input)?;
    let name = cte_name(input);

    let mut document = vec!["'<r>'".to_string()];
    for (i, key) in group.key_columns.iter().enumerate() {
        document.push(format!("'<k{}>'", i));
        document.push(xml_key(&group.alias, key));
        document.push(format!("'</k{}>'", i));
    }
    document.push("'<v>'".to_string());
    document.push(format!(
        "coalesce({},'<Collection/>')",
        document_array(input, group)?
    ));
    document.push("'</v></r>'".to_string());

    let cte = CommonTableExpression {
        sql: format!(
            "select {} doc from {} {}",
            document.join("||"),
            group.table_name,
            group.alias
        ),
        name: name.clone(),
    };

    let mut definitions = key_definitions(input, group, |i| format!("../../../k{}", i))?;
    definitions.push(
        input
            .shape
            .column_definitions(input.types, |column| xml_element_path(input, column))?,
    );

    Ok(TableSource {
        cte: Some(cte),
        join: JoinStyle::Correlated,
        from: format!(
            "xmltable('/r/v{}' passing {}.doc columns {}) {}",
            ELEMENTS_PATH,
            name,
            definitions.join(","),
            input.alias
        ),
        join_condition: Some(key_condition(input, group)),
        columns: input.shape.qualified(input.alias),
    })
}
