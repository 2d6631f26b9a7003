//! Boolean array predicates: contains, includes and intersects.

use super::emulation::{when_not_null, ElementRows};
use crate::function::context::RenderContext;
use crate::function::descriptor::RenderCall;
use crate::function::error::FunctionError;
use crate::function::null_safe::equality;
use crate::function::types::SqlType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateStrategy {
    /// PostgreSQL array operators (`@>`, `&&`)
    Operator,
    /// Subqueries over element rows
    Emulated(ElementRows),
    /// Generated `<CollectionType>_<name>` functions
    Oracle,
}

fn flag(nullable: bool) -> u8 {
    u8::from(nullable)
}

pub fn render_contains(
    strategy: &PredicateStrategy,
    nullable: bool,
    call: &RenderCall<'_>,
    ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    if call.arg(1)?.ty().is_some_and(SqlType::is_plural) {
        ctx.deprecation(
            call.function,
            "Passing an array as the element argument is deprecated, use array_includes instead",
        );
        return render_includes(strategy, nullable, call, ctx);
    }

    let array = call.sql(0)?;
    let element = call.sql(1)?;
    Ok(match strategy {
        PredicateStrategy::Operator if nullable => {
            format!("array_position({},{}) is not null", array, element)
        }
        PredicateStrategy::Operator => {
            let element = call.typed_sql(1, call.element_of(0).as_ref(), ctx)?;
            format!("{}@>array[{}]", call.operand(0)?, element)
        }
        PredicateStrategy::Emulated(rows) => {
            let rows = rows.source(&array, "t");
            let matches = equality(
                nullable,
                ctx.dialect.null_safe_equality(),
                &rows.element,
                &element,
            );
            format!("exists({})", rows.select("1", &[matches]))
        }
        PredicateStrategy::Oracle => format!(
            "{}_contains({},{},{})>0",
            call.collection_type(0)?,
            array,
            element,
            flag(nullable)
        ),
    })
}

pub fn render_includes(
    strategy: &PredicateStrategy,
    nullable: bool,
    call: &RenderCall<'_>,
    _ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let haystack = call.sql(0)?;
    let needle = call.sql(1)?;
    Ok(match strategy {
        PredicateStrategy::Operator if nullable => when_not_null(
            &[&haystack, &needle],
            &format!(
                "not exists(select unnest({}) except select unnest({}))",
                needle, haystack
            ),
        ),
        PredicateStrategy::Operator => {
            format!("{}@>{}", call.operand(0)?, call.operand(1)?)
        }
        PredicateStrategy::Emulated(rows) => {
            let wanted = rows.source(&needle, "t");
            let present = rows.source(&haystack, "s");
            let conditions = if nullable {
                vec![]
            } else {
                vec![format!("{} is not null", present.element)]
            };
            when_not_null(
                &[&haystack, &needle],
                &format!(
                    "not exists({} except {})",
                    wanted.select(&wanted.element, &[]),
                    present.select(&present.element, &conditions)
                ),
            )
        }
        PredicateStrategy::Oracle => format!(
            "{}_includes({},{},{})>0",
            call.collection_type(0)?,
            haystack,
            needle,
            flag(nullable)
        ),
    })
}

pub fn render_intersects(
    strategy: &PredicateStrategy,
    nullable: bool,
    call: &RenderCall<'_>,
    _ctx: &mut RenderContext<'_>,
) -> Result<String, FunctionError> {
    let left = call.sql(0)?;
    let right = call.sql(1)?;
    Ok(match strategy {
        PredicateStrategy::Operator if nullable => when_not_null(
            &[&left, &right],
            &format!(
                "exists(select unnest({}) intersect select unnest({}))",
                left, right
            ),
        ),
        PredicateStrategy::Operator => format!("{}&&{}", call.operand(0)?, call.operand(1)?),
        PredicateStrategy::Emulated(rows) => {
            let first = rows.source(&left, "t");
            let second = rows.source(&right, "s");
            let conditions = if nullable {
                vec![]
            } else {
                vec![format!("{} is not null", first.element)]
            };
            when_not_null(
                &[&left, &right],
                &format!(
                    "exists({} intersect {})",
                    first.select(&first.element, &conditions),
                    second.select(&second.element, &[])
                ),
            )
        }
        PredicateStrategy::Oracle => format!(
            "{}_intersects({},{},{})>0",
            call.collection_type(0)?,
            left,
            right,
            flag(nullable)
        ),
    })
}
