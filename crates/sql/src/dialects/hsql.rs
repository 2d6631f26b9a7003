//! HSQLDB

use super::registry::FunctionRegistry;
use super::Dialect;
use crate::array::{self, build::*, edit::*, emulation::ElementRows, extract::*, search::*};
use crate::array::{predicate::PredicateStrategy, sort::SortStrategy, to_string::ToStringStrategy};
use crate::function::types::CollectionKind;
use crate::unnest::UnnestStrategy;

pub(crate) fn hsql_functions() -> FunctionRegistry {
    let rows = ElementRows::Unnest;
    let predicate = PredicateStrategy::Emulated(rows);

    FunctionRegistry::new(Dialect::HSql)
        .register(array::contains(predicate, false))
        .register(array::contains(predicate, true))
        .register(array::includes(predicate, false))
        .register(array::includes(predicate, true))
        .register(array::intersects(predicate, false))
        .register(array::intersects(predicate, true))
        .register_alias("array_overlaps", array::intersects(predicate, false))
        .register_alias("array_overlaps_nullable", array::intersects(predicate, true))
        .register(array::position(PositionStrategy::Emulated(rows)))
        .register(array::positions(PositionsStrategy::Emulated(rows), CollectionKind::Array))
        .register(array::positions(PositionsStrategy::Emulated(rows), CollectionKind::List))
        .register(array::get(GetStrategy::Emulated(rows)))
        .register(array::length(LengthStrategy::Cardinality))
        .register(array::remove(RemoveStrategy::Emulated(rows)))
        // HSQLDB types `array[]` from context, no cast needed
        .register(array::remove_index(RemoveIndexStrategy::Emulated {
            rows,
            cast_empty: false,
        }))
        .register(array::replace(ReplaceStrategy::Emulated(rows)))
        .register(array::set(SetStrategy::SequenceArray))
        .register(array::slice(SliceStrategy::Emulated(rows)))
        .register(array::trim(TrimStrategy::TrimArray))
        .register(array::sort(SortStrategy::SortArray))
        .register(array::to_string(ToStringStrategy::GroupConcat))
        .register(array::concat(ConcatStrategy::Operator))
        .register(array::append(ConcatElementStrategy::Operator))
        .register(array::prepend(ConcatElementStrategy::Operator))
        .register(array::constructor(
            ConstructorStrategy::Bracket { typed: false },
            CollectionKind::Array,
        ))
        .register(array::constructor(
            ConstructorStrategy::Bracket { typed: false },
            CollectionKind::List,
        ))
        .register(array::fill(FillStrategy::SequenceArray, CollectionKind::Array))
        .register(array::fill(FillStrategy::SequenceArray, CollectionKind::List))
        .register(array::aggregate(AggregateStrategy::ArrayAgg))
        .with_unnest(UnnestStrategy::HSql)
}
