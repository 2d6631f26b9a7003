//! H2
//!
//! H2 cannot unnest an array column of an outer row, so element-wise
//! operations join `system_range` and read elements by index. Arrays longer
//! than the configured maximum are truncated.

use super::registry::FunctionRegistry;
use super::Dialect;
use crate::array::{self, build::*, edit::*, emulation::ElementRows, extract::*, search::*};
use crate::array::{predicate::PredicateStrategy, sort::SortStrategy, to_string::ToStringStrategy};
use crate::function::types::CollectionKind;
use crate::unnest::UnnestStrategy;
use plural_common::config::ArrayFunctionSettings;

pub(crate) fn h2_functions(settings: &ArrayFunctionSettings) -> FunctionRegistry {
    let rows = ElementRows::SystemRange {
        maximum_array_size: settings.maximum_array_size,
    };
    let predicate = PredicateStrategy::Emulated(rows);

    FunctionRegistry::new(Dialect::H2)
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
        .register(array::get(GetStrategy::ArrayGet))
        .register(array::length(LengthStrategy::Cardinality))
        .register(array::remove(RemoveStrategy::Emulated(rows)))
        .register(array::remove_index(RemoveIndexStrategy::Emulated {
            rows,
            cast_empty: false,
        }))
        .register(array::replace(ReplaceStrategy::Emulated(rows)))
        .register(array::set(SetStrategy::SystemRange {
            maximum_series_size: settings.maximum_series_size,
        }))
        .register(array::slice(SliceStrategy::ArraySlice))
        .register(array::trim(TrimStrategy::TrimArray))
        .register(array::sort(SortStrategy::Emulated(rows)))
        .register(array::to_string(ToStringStrategy::Emulated(rows)))
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
        .register(array::fill(FillStrategy::SystemRange, CollectionKind::Array))
        .register(array::fill(FillStrategy::SystemRange, CollectionKind::List))
        .register(array::aggregate(AggregateStrategy::ArrayAgg))
        .with_unnest(UnnestStrategy::H2 {
            maximum_array_size: settings.maximum_array_size,
        })
}
