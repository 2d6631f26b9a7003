//! The array function family.
//!
//! Each function here pairs the validation and type inference shared by all
//! dialects with a dialect-specific rendering strategy chosen at registration.

pub mod build;
pub mod edit;
pub mod emulation;
pub mod extract;
pub mod predicate;
pub mod search;
pub mod sort;
pub mod to_string;

use crate::function::descriptor::{FunctionDescriptor, Renderer};
use crate::function::resolver::{
    ArgumentTypes, ArrayViaArgumentReturnType, ArrayViaElement, ArrayViaElementReturnType,
    ElementViaArray, ElementViaArrayReturnType, InvariantArgument, InvariantReturnType,
    SameAsArgument, SameAsSibling,
};
use crate::function::types::{CollectionKind, SqlType};
use crate::function::validator::{
    ArgumentCount, ArgumentsValidator, ArrayAndElement, ArrayArgument, ArrayConstructorArguments,
    ArraysOfSameType, BooleanLiteralArgument,
};
use arrow::datatypes::DataType;

use build::{
    AggregateStrategy, ConcatElementStrategy, ConcatStrategy, ConstructorStrategy, FillStrategy,
};
use edit::{RemoveIndexStrategy, RemoveStrategy, ReplaceStrategy, SetStrategy};
use extract::{SliceStrategy, TrimStrategy};
use predicate::PredicateStrategy;
use search::{GetStrategy, LengthStrategy, PositionStrategy, PositionsStrategy};
use sort::SortStrategy;
use to_string::ToStringStrategy;

fn nullable_name(base: &str, nullable: bool) -> String {
    if nullable {
        format!("{}_nullable", base)
    } else {
        base.to_string()
    }
}

fn collection_name(base: &str, collection: CollectionKind) -> String {
    match collection {
        CollectionKind::Array => base.to_string(),
        CollectionKind::List => format!("{}_list", base),
    }
}

fn array_and_element(count: ArgumentCount, elements: &[usize]) -> impl ArgumentsValidator {
    count
        .and(ArrayArgument { index: 0 })
        .then(ArrayAndElement::new(0, elements))
}

/// Element inference in both directions between argument 0 and `element`.
fn array_element_types(element: usize) -> ArgumentTypes {
    ArgumentTypes::new()
        .at(0, ArrayViaElement {
            element_index: element,
        })
        .at(element, ElementViaArray { array_index: 0 })
}

fn same_array_types() -> ArgumentTypes {
    ArgumentTypes::new()
        .at(0, SameAsArgument { index: 1 })
        .at(1, SameAsArgument { index: 0 })
}

fn first_array() -> ArrayViaArgumentReturnType {
    ArrayViaArgumentReturnType { index: Some(0) }
}

pub fn contains(strategy: PredicateStrategy, nullable: bool) -> FunctionDescriptor {
    FunctionDescriptor::new(
        nullable_name("array_contains", nullable),
        "(ARRAY haystackArray, OBJECT needleElement)",
        array_and_element(ArgumentCount::Exactly(2), &[1]),
        array_element_types(1),
        InvariantReturnType(SqlType::boolean()),
        Renderer::Contains { strategy, nullable },
    )
}

pub fn includes(strategy: PredicateStrategy, nullable: bool) -> FunctionDescriptor {
    FunctionDescriptor::new(
        nullable_name("array_includes", nullable),
        "(ARRAY haystackArray, ARRAY needleArray)",
        ArgumentCount::Exactly(2).and(ArraysOfSameType),
        same_array_types(),
        InvariantReturnType(SqlType::boolean()),
        Renderer::Includes { strategy, nullable },
    )
}

pub fn intersects(strategy: PredicateStrategy, nullable: bool) -> FunctionDescriptor {
    FunctionDescriptor::new(
        nullable_name("array_intersects", nullable),
        "(ARRAY array0, ARRAY array1)",
        ArgumentCount::Exactly(2).and(ArraysOfSameType),
        same_array_types(),
        InvariantReturnType(SqlType::boolean()),
        Renderer::Intersects { strategy, nullable },
    )
}

pub fn position(strategy: PositionStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_position",
        "(ARRAY array, OBJECT element[, INTEGER startPosition])",
        array_and_element(ArgumentCount::Between(2, 3), &[1]),
        array_element_types(1).at(2, InvariantArgument(SqlType::integer())),
        InvariantReturnType(SqlType::integer()),
        Renderer::Position(strategy),
    )
}

pub fn positions(strategy: PositionsStrategy, collection: CollectionKind) -> FunctionDescriptor {
    let positions = match collection {
        CollectionKind::Array => SqlType::array_of(DataType::Int32),
        CollectionKind::List => SqlType::list_of(DataType::Int32),
    };
    FunctionDescriptor::new(
        collection_name("array_positions", collection),
        "(ARRAY array, OBJECT element)",
        array_and_element(ArgumentCount::Exactly(2), &[1]),
        array_element_types(1),
        InvariantReturnType(positions),
        Renderer::Positions(strategy),
    )
}

pub fn get(strategy: GetStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_get",
        "(ARRAY array, INTEGER index)",
        ArgumentCount::Exactly(2).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new().at(1, InvariantArgument(SqlType::integer())),
        ElementViaArrayReturnType { array_index: 0 },
        Renderer::Get(strategy),
    )
}

pub fn length(strategy: LengthStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_length",
        "(ARRAY array)",
        ArgumentCount::Exactly(1).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new(),
        InvariantReturnType(SqlType::integer()),
        Renderer::Length(strategy),
    )
}

pub fn remove(strategy: RemoveStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_remove",
        "(ARRAY array, OBJECT element)",
        array_and_element(ArgumentCount::Exactly(2), &[1]),
        array_element_types(1),
        first_array(),
        Renderer::Remove(strategy),
    )
}

pub fn remove_index(strategy: RemoveIndexStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_remove_index",
        "(ARRAY array, INTEGER index)",
        ArgumentCount::Exactly(2).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new().at(1, InvariantArgument(SqlType::integer())),
        first_array(),
        Renderer::RemoveIndex(strategy),
    )
}

pub fn replace(strategy: ReplaceStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_replace",
        "(ARRAY array, OBJECT oldElement, OBJECT newElement)",
        array_and_element(ArgumentCount::Exactly(3), &[1, 2]),
        array_element_types(1).at(2, ElementViaArray { array_index: 0 }),
        first_array(),
        Renderer::Replace(strategy),
    )
}

pub fn set(strategy: SetStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_set",
        "(ARRAY array, INTEGER index, OBJECT element)",
        array_and_element(ArgumentCount::Exactly(3), &[2]),
        array_element_types(2).at(1, InvariantArgument(SqlType::integer())),
        first_array(),
        Renderer::Set(strategy),
    )
}

pub fn slice(strategy: SliceStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_slice",
        "(ARRAY array, INTEGER start, INTEGER end)",
        ArgumentCount::Exactly(3).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new()
            .at(1, InvariantArgument(SqlType::integer()))
            .at(2, InvariantArgument(SqlType::integer())),
        first_array(),
        Renderer::Slice(strategy),
    )
}

pub fn trim(strategy: TrimStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_trim",
        "(ARRAY array, INTEGER elementsToRemove)",
        ArgumentCount::Exactly(2).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new().at(1, InvariantArgument(SqlType::integer())),
        first_array(),
        Renderer::Trim(strategy),
    )
}

pub fn sort(strategy: SortStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_sort",
        "(ARRAY array[, BOOLEAN descending[, BOOLEAN nullsFirst]])",
        ArgumentCount::Between(1, 3)
            .and(ArrayArgument { index: 0 })
            .then(BooleanLiteralArgument { index: 1 })
            .then(BooleanLiteralArgument { index: 2 }),
        ArgumentTypes::new(),
        first_array(),
        Renderer::Sort(strategy),
    )
}

pub fn to_string(strategy: ToStringStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_to_string",
        "(ARRAY array, STRING separator[, STRING defaultValue])",
        ArgumentCount::Between(2, 3).and(ArrayArgument { index: 0 }),
        ArgumentTypes::new()
            .at(1, InvariantArgument(SqlType::string()))
            .at(2, InvariantArgument(SqlType::string())),
        InvariantReturnType(SqlType::string()),
        Renderer::ToString(strategy),
    )
}

pub fn concat(strategy: ConcatStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_concat",
        "(ARRAY array0, ARRAY array1[, ARRAY arrayN...])",
        ArgumentCount::AtLeast(2).and(ArraysOfSameType),
        ArgumentTypes::new().rest(SameAsSibling),
        ArrayViaArgumentReturnType { index: None },
        Renderer::Concat(strategy),
    )
}

pub fn append(strategy: ConcatElementStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_append",
        "(ARRAY array, OBJECT element)",
        array_and_element(ArgumentCount::Exactly(2), &[1]),
        array_element_types(1),
        first_array(),
        Renderer::ConcatElement {
            strategy,
            prepend: false,
        },
    )
}

pub fn prepend(strategy: ConcatElementStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_prepend",
        "(OBJECT element, ARRAY array)",
        ArgumentCount::Exactly(2)
            .and(ArrayArgument { index: 1 })
            .then(ArrayAndElement::new(1, &[0])),
        ArgumentTypes::new()
            .at(0, ElementViaArray { array_index: 1 })
            .at(1, ArrayViaElement { element_index: 0 }),
        ArrayViaArgumentReturnType { index: Some(1) },
        Renderer::ConcatElement {
            strategy,
            prepend: true,
        },
    )
}

pub fn constructor(
    strategy: ConstructorStrategy,
    collection: CollectionKind,
) -> FunctionDescriptor {
    FunctionDescriptor::new(
        collection_name("array", collection),
        "([OBJECT element...])",
        ArrayConstructorArguments,
        ArgumentTypes::new().rest(SameAsSibling),
        ArrayViaElementReturnType {
            element_index: None,
            collection,
        },
        Renderer::Constructor(strategy),
    )
}

pub fn fill(strategy: FillStrategy, collection: CollectionKind) -> FunctionDescriptor {
    FunctionDescriptor::new(
        collection_name("array_fill", collection),
        "(OBJECT element, INTEGER count)",
        ArgumentCount::Exactly(2),
        ArgumentTypes::new().at(1, InvariantArgument(SqlType::integer())),
        ArrayViaElementReturnType {
            element_index: Some(0),
            collection,
        },
        Renderer::Fill(strategy),
    )
}

pub fn aggregate(strategy: AggregateStrategy) -> FunctionDescriptor {
    FunctionDescriptor::new(
        "array_agg",
        "(OBJECT element)",
        ArgumentCount::Exactly(1),
        ArgumentTypes::new(),
        ArrayViaElementReturnType {
            element_index: Some(0),
            collection: CollectionKind::Array,
        },
        Renderer::Aggregate(strategy),
    )
}
