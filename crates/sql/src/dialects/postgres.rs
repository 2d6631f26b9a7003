//! PostgreSQL family (PostgreSQL, CockroachDB, GaussDB)

use super::registry::FunctionRegistry;
use super::Dialect;
use crate::array::{self, build::*, edit::*, emulation::ElementRows, extract::*, search::*};
use crate::array::{predicate::PredicateStrategy, sort::SortStrategy, to_string::ToStringStrategy};
use crate::function::types::CollectionKind;
use crate::unnest::UnnestStrategy;

pub(crate) fn postgresql_functions(dialect: Dialect) -> FunctionRegistry {
    let native_trim = dialect == Dialect::PostgreSql;
    let fill = if dialect == Dialect::CockroachDb {
        FillStrategy::GenerateSeries
    } else {
        FillStrategy::ArrayFill
    };
    let trim = if native_trim {
        TrimStrategy::TrimArray
    } else {
        TrimStrategy::Emulated {
            rows: ElementRows::Unnest,
            cast_empty: true,
        }
    };

    FunctionRegistry::new(dialect)
        // Predicates
        .register(array::contains(PredicateStrategy::Operator, false))
        .register(array::contains(PredicateStrategy::Operator, true))
        .register(array::includes(PredicateStrategy::Operator, false))
        .register(array::includes(PredicateStrategy::Operator, true))
        .register(array::intersects(PredicateStrategy::Operator, false))
        .register(array::intersects(PredicateStrategy::Operator, true))
        .register_alias("array_overlaps", array::intersects(PredicateStrategy::Operator, false))
        .register_alias(
            "array_overlaps_nullable",
            array::intersects(PredicateStrategy::Operator, true),
        )
        // Lookup
        .register(array::position(PositionStrategy::ArrayPosition))
        .register(array::positions(PositionsStrategy::ArrayPositions, CollectionKind::Array))
        .register(array::positions(PositionsStrategy::ArrayPositions, CollectionKind::List))
        .register(array::get(GetStrategy::Subscript))
        .register(array::length(LengthStrategy::Cardinality))
        // Editing
        .register(array::remove(RemoveStrategy::ArrayRemove))
        .register(array::remove_index(RemoveIndexStrategy::Emulated {
            rows: ElementRows::Unnest,
            cast_empty: true,
        }))
        .register(array::replace(ReplaceStrategy::ArrayReplace))
        .register(array::set(SetStrategy::GenerateSeries))
        .register(array::slice(SliceStrategy::Subscript))
        .register(array::trim(trim))
        .register(array::sort(SortStrategy::Unnest))
        .register(array::to_string(ToStringStrategy::ArrayToString))
        // Construction
        .register(array::concat(ConcatStrategy::NullSafeOperator))
        .register(array::append(ConcatElementStrategy::ArrayAppend))
        .register(array::prepend(ConcatElementStrategy::ArrayAppend))
        .register(array::constructor(
            ConstructorStrategy::Bracket { typed: true },
            CollectionKind::Array,
        ))
        .register(array::constructor(
            ConstructorStrategy::Bracket { typed: true },
            CollectionKind::List,
        ))
        .register(array::fill(fill, CollectionKind::Array))
        .register(array::fill(fill, CollectionKind::List))
        .register(array::aggregate(AggregateStrategy::ArrayAgg))
        .with_unnest(UnnestStrategy::PostgreSql)
}
