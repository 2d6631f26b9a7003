//! Already-compiled argument expressions of a function call.

use super::error::FunctionError;
use super::parameters::PLACEHOLDER;
use super::sanitize::safe_ident;
use super::types::SqlType;
use arrow::datatypes::DataType;
use sqlparser::ast::{Expr as SqlExpr, Value};

/// A key column of the table an array column belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyColumn {
    pub name: String,
    pub data_type: DataType,
}

/// The table a column reference is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGroup {
    pub table_name: String,
    pub alias: String,
    pub key_columns: Vec<KeyColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub qualifier: Option<String>,
    pub column: String,
    pub ty: Option<SqlType>,
    pub table: Option<TableGroup>,
}

impl ColumnRef {
    pub fn to_sql(&self) -> Result<String, FunctionError> {
        let column = safe_ident(&self.column)?;
        let expr = match &self.qualifier {
            Some(qualifier) => SqlExpr::CompoundIdentifier(vec![safe_ident(qualifier)?, column]),
            None => SqlExpr::Identifier(column),
        };
        Ok(expr.to_string())
    }
}

/// An argument of a function call. `ty` is `None` while the type is unresolved,
/// e.g. for a parameter that is not bound yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentExpr {
    Literal {
        value: Value,
        ty: Option<SqlType>,
    },
    Column(ColumnRef),
    Parameter {
        ty: Option<SqlType>,
    },
    Aggregate {
        function: String,
        args: Vec<ArgumentExpr>,
        distinct: bool,
        ty: Option<SqlType>,
    },
    Generic {
        expr: SqlExpr,
        ty: Option<SqlType>,
    },
}

impl ArgumentExpr {
    pub fn integer(value: i64) -> Self {
        ArgumentExpr::Literal {
            value: Value::Number(value.to_string(), false),
            ty: Some(SqlType::integer()),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        ArgumentExpr::Literal {
            value: Value::SingleQuotedString(value.into()),
            ty: Some(SqlType::string()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        ArgumentExpr::Literal {
            value: Value::Boolean(value),
            ty: Some(SqlType::boolean()),
        }
    }

    pub fn null() -> Self {
        ArgumentExpr::Literal {
            value: Value::Null,
            ty: None,
        }
    }

    pub fn column(qualifier: &str, column: &str, ty: SqlType) -> Self {
        ArgumentExpr::Column(ColumnRef {
            qualifier: Some(qualifier.to_string()),
            column: column.to_string(),
            ty: Some(ty),
            table: None,
        })
    }

    pub fn parameter() -> Self {
        ArgumentExpr::Parameter { ty: None }
    }

    pub fn typed_parameter(ty: SqlType) -> Self {
        ArgumentExpr::Parameter { ty: Some(ty) }
    }

    pub fn generic(expr: SqlExpr, ty: Option<SqlType>) -> Self {
        ArgumentExpr::Generic { expr, ty }
    }

    /// Binds a column reference to its table. Other arguments are returned unchanged.
    pub fn with_table(self, table: TableGroup) -> Self {
        match self {
            ArgumentExpr::Column(column) => ArgumentExpr::Column(ColumnRef {
                table: Some(table),
                ..column
            }),
            other => other,
        }
    }

    pub fn ty(&self) -> Option<&SqlType> {
        match self {
            ArgumentExpr::Literal { ty, .. }
            | ArgumentExpr::Parameter { ty }
            | ArgumentExpr::Aggregate { ty, .. }
            | ArgumentExpr::Generic { ty, .. } => ty.as_ref(),
            ArgumentExpr::Column(column) => column.ty.as_ref(),
        }
    }

    /// Same argument with a resolved type.
    pub fn with_type(mut self, resolved: SqlType) -> Self {
        let slot = match &mut self {
            ArgumentExpr::Literal { ty, .. }
            | ArgumentExpr::Parameter { ty }
            | ArgumentExpr::Aggregate { ty, .. }
            | ArgumentExpr::Generic { ty, .. } => ty,
            ArgumentExpr::Column(column) => &mut column.ty,
        };
        *slot = Some(resolved);
        self
    }

    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            ArgumentExpr::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, ArgumentExpr::Parameter { .. })
    }

    pub fn boolean_literal(&self) -> Option<bool> {
        match self {
            ArgumentExpr::Literal {
                value: Value::Boolean(value),
                ..
            } => Some(*value),
            _ => None,
        }
    }

    pub fn is_null_literal(&self) -> bool {
        matches!(
            self,
            ArgumentExpr::Literal {
                value: Value::Null,
                ..
            }
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ArgumentExpr::Literal { .. })
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            ArgumentExpr::Literal {
                value: Value::SingleQuotedString(_),
                ..
            }
        )
    }

    /// Arguments without a known type that may need a cast to become typed.
    pub fn is_untyped(&self) -> bool {
        match self {
            ArgumentExpr::Parameter { ty } => ty.is_none(),
            other => other.is_null_literal(),
        }
    }

    pub fn to_sql(&self) -> Result<String, FunctionError> {
        self.to_sql_with(&mut |_| PLACEHOLDER.to_string())
    }

    /// Renders the argument, writing the `n`-th parameter it contains as
    /// `placeholder(n)`. Generic expressions are written verbatim.
    pub fn to_sql_with(
        &self,
        placeholder: &mut dyn FnMut(usize) -> String,
    ) -> Result<String, FunctionError> {
        self.write_sql(placeholder, &mut 0)
    }

    fn write_sql(
        &self,
        placeholder: &mut dyn FnMut(usize) -> String,
        next: &mut usize,
    ) -> Result<String, FunctionError> {
        match self {
            ArgumentExpr::Literal { value, .. } => Ok(value.to_string()),
            ArgumentExpr::Column(column) => column.to_sql(),
            ArgumentExpr::Parameter { .. } => {
                let sql = placeholder(*next);
                *next += 1;
                Ok(sql)
            }
            ArgumentExpr::Aggregate {
                function,
                args,
                distinct,
                ..
            } => {
                let rendered = args
                    .iter()
                    .map(|arg| arg.write_sql(placeholder, next))
                    .collect::<Result<Vec<_>, _>>()?;
                let distinct = if *distinct { "distinct " } else { "" };
                Ok(format!("{}({}{})", function, distinct, rendered.join(",")))
            }
            ArgumentExpr::Generic { expr, .. } => Ok(expr.to_string()),
        }
    }

    /// Renders the argument so it can be followed by a subscript or an operator.
    pub fn to_operand_sql(&self) -> Result<String, FunctionError> {
        Ok(self.operand(self.to_sql()?))
    }

    /// Wraps already rendered SQL of this argument for use as an operand.
    pub(crate) fn operand(&self, sql: String) -> String {
        match self {
            ArgumentExpr::Generic { expr, .. } if !is_primary(expr) => format!("({})", sql),
            _ => sql,
        }
    }
}

fn is_primary(expr: &SqlExpr) -> bool {
    matches!(
        expr,
        SqlExpr::Identifier(_)
            | SqlExpr::CompoundIdentifier(_)
            | SqlExpr::Value(_)
            | SqlExpr::Function(_)
            | SqlExpr::Nested(_)
            | SqlExpr::Cast { .. }
    )
}
