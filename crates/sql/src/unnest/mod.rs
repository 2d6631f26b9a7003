//! `unnest`: turning an array into a row source.
//!
//! Unlike scalar functions, unnest produces a `TableSource` the caller joins
//! into its FROM clause. How the rows are produced depends on the dialect and
//! on how the array is stored (native, JSON or XML).

pub mod hana;
pub mod json;
pub mod native;
pub mod sequence;
pub mod xml;

use crate::dialects::{Dialect, TypeMapper};
use crate::function::argument::ArgumentExpr;
use crate::function::context::RenderContext;
use crate::function::error::FunctionError;
use crate::function::sanitize::validate_identifier;
use crate::function::types::{ArrayStorage, PluralType, SqlType};
use crate::function::validator::{
    ArgumentCount, ArgumentsValidator, ArrayArgument, CompositeValidator,
};
use arrow::datatypes::DataType;

pub const UNNEST: &str = "unnest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnestOptions {
    pub alias: String,
    /// Column name for basic elements. Composite elements use their field names.
    pub element_column: String,
    pub ordinality_column: Option<String>,
}

impl Default for UnnestOptions {
    fn default() -> Self {
        Self {
            alias: "t".to_string(),
            element_column: "element".to_string(),
            ordinality_column: None,
        }
    }
}

impl UnnestOptions {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }

    pub fn with_element_column(mut self, name: impl Into<String>) -> Self {
        self.element_column = name.into();
        self
    }

    pub fn with_ordinality(mut self, name: impl Into<String>) -> Self {
        self.ordinality_column = Some(name.into());
        self
    }
}

/// How the table source joins the tables before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// `cross join lateral <source>`
    Lateral,
    /// `cross apply <source>`
    CrossApply,
    /// Plain join; the source may reference preceding tables and is
    /// restricted by `join_condition`
    Correlated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedColumn {
    pub name: String,
    pub expression: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    pub name: String,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    /// Must be added to the statement's WITH clause
    pub cte: Option<CommonTableExpression>,
    pub join: JoinStyle,
    pub from: String,
    pub join_condition: Option<String>,
    pub columns: Vec<ProjectedColumn>,
}

impl TableSource {
    /// Join clause placing this source after the preceding FROM items.
    pub fn join_clause(&self) -> String {
        match (self.join, &self.join_condition) {
            (JoinStyle::Lateral, _) => format!("cross join lateral {}", self.from),
            (JoinStyle::CrossApply, _) => format!("cross apply {}", self.from),
            (JoinStyle::Correlated, Some(condition)) => {
                format!("join {} on {}", self.from, condition)
            }
            (JoinStyle::Correlated, None) => format!("cross join {}", self.from),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ProjectedColumn> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Columns of one produced row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowShape {
    pub columns: Vec<(String, DataType)>,
    pub ordinality: Option<String>,
}

impl RowShape {
    fn of(plural: &PluralType, options: &UnnestOptions) -> Result<Self, FunctionError> {
        let columns = match &plural.element {
            DataType::Struct(fields) => fields
                .iter()
                .map(|field| (field.name().clone(), field.data_type().clone()))
                .collect(),
            element => vec![(options.element_column.clone(), element.clone())],
        };
        for (name, _) in &columns {
            validate_identifier(name)?;
        }
        if let Some(ordinality) = &options.ordinality_column {
            validate_identifier(ordinality)?;
        }
        Ok(Self {
            columns,
            ordinality: options.ordinality_column.clone(),
        })
    }

    /// Projected columns for expressions built by `expression`, plus the
    /// ordinality column.
    pub(crate) fn project(
        &self,
        expression: impl Fn(&str, &DataType) -> Result<String, FunctionError>,
        ordinality: impl FnOnce() -> String,
    ) -> Result<Vec<ProjectedColumn>, FunctionError> {
        let mut projected = self
            .columns
            .iter()
            .map(|(name, data_type)| {
                Ok(ProjectedColumn {
                    name: name.clone(),
                    expression: expression(name, data_type)?,
                    data_type: data_type.clone(),
                })
            })
            .collect::<Result<Vec<_>, FunctionError>>()?;
        if let Some(name) = &self.ordinality {
            projected.push(ProjectedColumn {
                name: name.clone(),
                expression: ordinality(),
                data_type: DataType::Int64,
            });
        }
        Ok(projected)
    }

    /// Projected columns read as `<alias>.<name>`.
    pub(crate) fn qualified(&self, alias: &str) -> Vec<ProjectedColumn> {
        self.columns
            .iter()
            .map(|(name, data_type)| (name, data_type.clone()))
            .chain(self.ordinality.iter().map(|name| (name, DataType::Int64)))
            .map(|(name, data_type)| ProjectedColumn {
                name: name.clone(),
                expression: format!("{}.{}", alias, name),
                data_type,
            })
            .collect()
    }

    /// `columns(..)` definitions for `json_table`/`xmltable`.
    pub(crate) fn column_definitions(
        &self,
        types: &dyn TypeMapper,
        path: impl Fn(&str) -> String,
    ) -> Result<String, FunctionError> {
        let mut definitions = self
            .columns
            .iter()
            .map(|(name, data_type)| {
                Ok(format!(
                    "{} {} path '{}'",
                    name,
                    types.map_type(data_type)?,
                    path(name)
                ))
            })
            .collect::<Result<Vec<_>, FunctionError>>()?;
        if let Some(ordinality) = &self.ordinality {
            definitions.push(format!("{} for ordinality", ordinality));
        }
        Ok(definitions.join(","))
    }
}

/// Everything a storage strategy needs to build its table source.
pub(crate) struct UnnestInput<'a> {
    pub arg: &'a ArgumentExpr,
    pub array: String,
    pub plural: &'a PluralType,
    pub shape: RowShape,
    pub alias: &'a str,
    pub dialect: Dialect,
    pub types: &'a dyn TypeMapper,
}

impl UnnestInput<'_> {
    pub fn composite(&self) -> bool {
        self.plural.is_composite()
    }

    pub fn unsupported(&self, message: impl Into<String>) -> FunctionError {
        FunctionError::unsupported(UNNEST, self.dialect.name(), message)
    }
}

/// Unnest rendering per dialect family; the storage kind is dispatched at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnnestStrategy {
    PostgreSql,
    HSql,
    Oracle,
    H2 { maximum_array_size: u32 },
    Db2 { maximum_array_size: u32 },
    SqlServer,
    Sybase,
    Hana,
}

#[derive(Debug, Clone)]
pub struct UnnestFunction {
    strategy: UnnestStrategy,
    validator: CompositeValidator,
}

impl UnnestFunction {
    pub fn new(strategy: UnnestStrategy) -> Self {
        Self {
            strategy,
            validator: ArgumentCount::Exactly(1).and(ArrayArgument { index: 0 }),
        }
    }

    pub fn name(&self) -> &'static str {
        UNNEST
    }

    pub fn strategy(&self) -> UnnestStrategy {
        self.strategy
    }

    pub fn validate(&self, args: &[ArgumentExpr]) -> Result<(), FunctionError> {
        self.validator.validate(args, UNNEST)
    }

    fn array_argument<'a>(
        &self,
        args: &'a [ArgumentExpr],
    ) -> Result<(&'a ArgumentExpr, &'a PluralType), FunctionError> {
        self.validate(args)?;
        args.first()
            .and_then(|arg| arg.ty().and_then(SqlType::as_plural).map(|plural| (arg, plural)))
            .ok_or_else(|| {
                FunctionError::semantic(UNNEST, "could not determine the array type of argument 0")
            })
    }

    pub fn resolve_row_shape(
        &self,
        args: &[ArgumentExpr],
        options: &UnnestOptions,
    ) -> Result<RowShape, FunctionError> {
        let (_, plural) = self.array_argument(args)?;
        RowShape::of(plural, options)
    }

    pub fn render_table_source(
        &self,
        args: &[ArgumentExpr],
        options: &UnnestOptions,
        ctx: &RenderContext<'_>,
    ) -> Result<TableSource, FunctionError> {
        let (arg, plural) = self.array_argument(args)?;
        validate_identifier(&options.alias)?;
        let input = UnnestInput {
            arg,
            array: arg.to_sql()?,
            plural,
            shape: RowShape::of(plural, options)?,
            alias: &options.alias,
            dialect: ctx.dialect,
            types: ctx.types,
        };

        let source = match (plural.storage, self.strategy) {
            (ArrayStorage::Native, UnnestStrategy::PostgreSql | UnnestStrategy::HSql) => {
                native::unnest(&input)
            }
            (ArrayStorage::Native, UnnestStrategy::Oracle) => native::oracle_table(&input),
            (ArrayStorage::Native, UnnestStrategy::H2 { maximum_array_size }) => {
                sequence::system_range(&input, maximum_array_size)
            }
            (ArrayStorage::Native, UnnestStrategy::Db2 { maximum_array_size }) => {
                sequence::xquery_range(&input, maximum_array_size)
            }
            (ArrayStorage::Json, UnnestStrategy::PostgreSql) => json::jsonb_array_elements(&input),
            (ArrayStorage::Json, UnnestStrategy::H2 { maximum_array_size }) => {
                sequence::json_system_range(&input, maximum_array_size)
            }
            (ArrayStorage::Json, UnnestStrategy::Oracle | UnnestStrategy::Db2 { .. }) => {
                json::json_table(&input)
            }
            (ArrayStorage::Json, UnnestStrategy::SqlServer) => json::openjson(&input),
            (ArrayStorage::Json, UnnestStrategy::Hana) => hana::json_table(&input),
            (ArrayStorage::Xml, UnnestStrategy::PostgreSql)
                if ctx.dialect == Dialect::PostgreSql =>
            {
                xml::xmltable(&input)
            }
            (
                ArrayStorage::Xml,
                UnnestStrategy::Oracle | UnnestStrategy::Db2 { .. } | UnnestStrategy::Sybase,
            ) => xml::xmltable(&input),
            (ArrayStorage::Xml, UnnestStrategy::Hana) => hana::xmltable(&input),
            (storage, _) => Err(input.unsupported(format!(
                "unnest of {:?} arrays is not supported",
                storage
            ))),
        }?;

        tracing::debug!(
            dialect = %ctx.dialect,
            from = %source.from,
            columns = source.columns.len(),
            "Rendered unnest table source"
        );
        Ok(source)
    }
}
