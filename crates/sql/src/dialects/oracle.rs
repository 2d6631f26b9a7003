//! Oracle
//!
//! Oracle arrays are named collection types. Every operation calls a
//! function generated per collection type, named `<CollectionType>_<operation>`.

use super::registry::FunctionRegistry;
use super::Dialect;
use crate::array::{self, build::*, edit::*, extract::*, search::*};
use crate::array::{predicate::PredicateStrategy, sort::SortStrategy, to_string::ToStringStrategy};
use crate::function::types::CollectionKind;
use crate::unnest::UnnestStrategy;

pub(crate) fn oracle_functions() -> FunctionRegistry {
    let predicate = PredicateStrategy::Oracle;

    FunctionRegistry::new(Dialect::Oracle)
        .register(array::contains(predicate, false))
        .register(array::contains(predicate, true))
        .register(array::includes(predicate, false))
        .register(array::includes(predicate, true))
        .register(array::intersects(predicate, false))
        .register(array::intersects(predicate, true))
        .register_alias("array_overlaps", array::intersects(predicate, false))
        .register_alias("array_overlaps_nullable", array::intersects(predicate, true))
        .register(array::position(PositionStrategy::Oracle))
        .register(array::positions(PositionsStrategy::Oracle, CollectionKind::Array))
        .register(array::positions(PositionsStrategy::Oracle, CollectionKind::List))
        .register(array::get(GetStrategy::Oracle))
        .register(array::length(LengthStrategy::Oracle))
        .register(array::remove(RemoveStrategy::Oracle))
        .register(array::remove_index(RemoveIndexStrategy::Oracle))
        .register(array::replace(ReplaceStrategy::Oracle))
        .register(array::set(SetStrategy::Oracle))
        .register(array::slice(SliceStrategy::Oracle))
        .register(array::trim(TrimStrategy::Oracle))
        .register(array::sort(SortStrategy::Oracle))
        .register(array::to_string(ToStringStrategy::Oracle))
        .register(array::concat(ConcatStrategy::Oracle))
        .register(array::append(ConcatElementStrategy::Oracle))
        .register(array::prepend(ConcatElementStrategy::Oracle))
        .register(array::constructor(ConstructorStrategy::Oracle, CollectionKind::Array))
        .register(array::constructor(ConstructorStrategy::Oracle, CollectionKind::List))
        .register(array::fill(FillStrategy::Oracle, CollectionKind::Array))
        .register(array::fill(FillStrategy::Oracle, CollectionKind::List))
        .register(array::aggregate(AggregateStrategy::Oracle))
        .with_unnest(UnnestStrategy::Oracle)
}
