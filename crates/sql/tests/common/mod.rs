
use arrow::datatypes::{DataType, Field, Fields};
use plural_common::config::ArrayFunctionSettings;
use plural_sql::function::argument::{KeyColumn, TableGroup};
use plural_sql::function::types::{ArrayStorage, PluralType};
use plural_sql::{
    ArgumentExpr, DdlTypeRegistry, Diagnostics, Dialect, FunctionError, FunctionRegistry,
    RenderContext, RenderedCall, SqlType, TableSource, UnnestOptions,
};

#[allow(dead_code)]
pub fn int_array() -> SqlType {
    SqlType::array_of(DataType::Int32)
}

#[allow(dead_code)]
pub fn ints() -> ArgumentExpr {
    ArgumentExpr::column("t0", "ints", int_array())
}

#[allow(dead_code)]
pub fn other_ints() -> ArgumentExpr {
    ArgumentExpr::column("t0", "other_ints", int_array())
}

#[allow(dead_code)]
pub fn names() -> ArgumentExpr {
    ArgumentExpr::column("t0", "names", SqlType::array_of(DataType::Utf8))
}

#[allow(dead_code)]
pub fn flags() -> ArgumentExpr {
    ArgumentExpr::column("t0", "flags", SqlType::array_of(DataType::Boolean))
}

#[allow(dead_code)]
pub fn stored(storage: ArrayStorage, element: DataType) -> ArgumentExpr {
    ArgumentExpr::column(
        "t0",
        "doc",
        SqlType::Plural(PluralType::array(element).with_storage(storage)),
    )
}

#[allow(dead_code)]
pub fn point_struct() -> DataType {
    DataType::Struct(Fields::from(vec![
        Field::new("x", DataType::Int32, true),
        Field::new("y", DataType::Int32, true),
    ]))
}

#[allow(dead_code)]
pub fn keyed_table() -> TableGroup {
    TableGroup {
        table_name: "entity".to_string(),
        alias: "t0".to_string(),
        key_columns: vec![KeyColumn {
            name: "id".to_string(),
            data_type: DataType::Int64,
        }],
    }
}

#[allow(dead_code)]
pub fn registry(dialect: Dialect) -> FunctionRegistry {
    FunctionRegistry::for_dialect(dialect, &ArrayFunctionSettings::default())
}

/// Renders `name(args)` for `dialect` with an optional implied result type.
#[allow(dead_code)]
pub fn render_call_with(
    dialect: Dialect,
    name: &str,
    args: &[ArgumentExpr],
    implied: Option<&SqlType>,
) -> Result<RenderedCall, FunctionError> {
    let registry = registry(dialect);
    let types = DdlTypeRegistry::new(dialect);
    let mut diagnostics = Diagnostics::default();
    let mut ctx = RenderContext::new(dialect, &types, &mut diagnostics);
    registry.get(name)?.render_call(args, implied, &mut ctx)
}

#[allow(dead_code)]
pub fn render_call(
    dialect: Dialect,
    name: &str,
    args: &[ArgumentExpr],
) -> Result<RenderedCall, FunctionError> {
    render_call_with(dialect, name, args, None)
}

#[allow(dead_code)]
pub fn render_with(
    dialect: Dialect,
    name: &str,
    args: &[ArgumentExpr],
    implied: Option<&SqlType>,
) -> Result<String, FunctionError> {
    render_call_with(dialect, name, args, implied).map(|rendered| rendered.sql)
}

#[allow(dead_code)]
pub fn render(
    dialect: Dialect,
    name: &str,
    args: &[ArgumentExpr],
) -> Result<String, FunctionError> {
    render_with(dialect, name, args, None)
}

#[allow(dead_code)]
pub fn unnest_with(
    dialect: Dialect,
    settings: ArrayFunctionSettings,
    arg: ArgumentExpr,
    options: &UnnestOptions,
) -> Result<TableSource, FunctionError> {
    let registry = FunctionRegistry::for_dialect(dialect, &settings);
    let types = DdlTypeRegistry::new(dialect);
    let mut diagnostics = Diagnostics::default();
    let ctx = RenderContext::new(dialect, &types, &mut diagnostics).with_settings(settings);
    registry.unnest()?.render_table_source(&[arg], options, &ctx)
}

#[allow(dead_code)]
pub fn unnest(
    dialect: Dialect,
    arg: ArgumentExpr,
    options: &UnnestOptions,
) -> Result<TableSource, FunctionError> {
    unnest_with(dialect, ArrayFunctionSettings::default(), arg, options)
}

/// Upper bound of a sequence join such as `system_range(1,N) t` or
/// `xmltable('1 to N' ...)`.
#[allow(dead_code)]
pub fn sequence_bound(from: &str) -> Option<usize> {
    let rest = match from.find("system_range(1,") {
        Some(at) => &from[at + "system_range(1,".len()..],
        None => &from[from.find("'1 to ")? + "'1 to ".len()..],
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// `?` placeholders outside string literals.
#[allow(dead_code)]
pub fn placeholders(sql: &str) -> usize {
    let mut in_string = false;
    sql.chars()
        .filter(|c| {
            if *c == '\'' {
                in_string = !in_string;
            }
            *c == '?' && !in_string
        })
        .count()
}

/// Parentheses in rendered SQL (outside string literals) must balance.
#[allow(dead_code)]
pub fn balanced(sql: &str) -> bool {
    let mut depth = 0i32;
    let mut in_string = false;
    for c in sql.chars() {
        match c {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && !in_string
}
