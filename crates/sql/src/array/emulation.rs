//! Row sources that iterate the elements of an array inside a subquery.
//!
//! Dialects without a native function for an operation emulate it by
//! aggregating or filtering over one row per array element.

use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;

/// How to produce one row per element of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRows {
    /// `unnest(a) with ordinality`
    Unnest,
    /// Join against `system_range(1, max)` and pick elements by index.
    /// Elements beyond `max` are silently dropped.
    SystemRange { maximum_array_size: u32 },
}

/// FROM clause plus the expressions addressing one element row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSource {
    pub from: String,
    pub element: String,
    pub index: String,
    pub filter: Option<String>,
}

impl ElementRows {
    pub fn source(&self, array: &str, alias: &str) -> RowSource {
        match self {
            ElementRows::Unnest => RowSource {
                from: format!("unnest({}) with ordinality {}(val,idx)", array, alias),
                element: format!("{}.val", alias),
                index: format!("{}.idx", alias),
                filter: None,
            },
            ElementRows::SystemRange { maximum_array_size } => RowSource {
                from: format!("system_range(1,{}) {}", maximum_array_size, alias),
                element: format!("array_get({},{}.x)", array, alias),
                index: format!("{}.x", alias),
                filter: Some(format!("{}.x<=coalesce(cardinality({}),0)", alias, array)),
            },
        }
    }
}

impl RowSource {
    /// `from <source>[ where <conditions>]`, including the source's own filter.
    pub fn from_where(&self, conditions: &[String]) -> String {
        let all: Vec<&str> = self
            .filter
            .iter()
            .chain(conditions.iter())
            .map(String::as_str)
            .collect();
        if all.is_empty() {
            format!("from {}", self.from)
        } else {
            format!("from {} where {}", self.from, all.join(" and "))
        }
    }

    /// `select <projection> from ...`
    pub fn select(&self, projection: &str, conditions: &[String]) -> String {
        format!("select {} {}", projection, self.from_where(conditions))
    }

    /// Array of `projection` over the rows, kept in element order.
    pub fn aggregate(&self, projection: &str, conditions: &[String]) -> String {
        format!(
            "select array_agg({} order by {}) {}",
            projection,
            self.index,
            self.from_where(conditions)
        )
    }
}

/// `case when <all not null> then <expr> end`
pub(crate) fn when_not_null(operands: &[&str], expr: &str) -> String {
    let guard: Vec<String> = operands
        .iter()
        .map(|operand| format!("{} is not null", operand))
        .collect();
    format!("case when {} then {} end", guard.join(" and "), expr)
}

/// Empty array literal, typed with the call's array type if `cast` is set.
pub(crate) fn empty_array(
    cast: bool,
    call: &RenderCall<'_>,
    ctx: &RenderContext<'_>,
) -> Result<String, FunctionError> {
    if cast {
        Ok(format!("cast(array[] as {})", call.return_cast_target(ctx)?))
    } else {
        Ok("array[]".to_string())
    }
}
