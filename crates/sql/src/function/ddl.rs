//! Helpers that derive plural types and their DDL names.

use super::error::FunctionError;
use super::types::{ArrayStorage, CollectionKind, PluralType, SqlType};
use crate::dialects::type_mapper::{oracle_array_type_name, TypeMapper};
use arrow::datatypes::DataType;

/// The plural type holding elements of `element`, if `element` is a basic,
/// non-null type.
pub fn resolve_array_type(element: &SqlType, collection: CollectionKind) -> Option<SqlType> {
    match element {
        SqlType::Basic(DataType::Null) => None,
        SqlType::Basic(data_type) => Some(SqlType::Plural(
            PluralType::array(data_type.clone()).with_collection(collection),
        )),
        SqlType::Plural(_) => None,
    }
}

/// JSON-stored counterpart of an array type, or of the array of an element.
pub fn json_array_variant(ty: &SqlType) -> Option<SqlType> {
    match ty {
        SqlType::Plural(plural) => Some(SqlType::Plural(
            plural.clone().with_storage(ArrayStorage::Json),
        )),
        basic => resolve_array_type(basic, CollectionKind::Array)
            .and_then(|array| json_array_variant(&array)),
    }
}

/// DDL text of `ty` for use inside `cast(.. as <target>)`.
pub fn cast_target(types: &dyn TypeMapper, ty: &SqlType) -> Result<String, FunctionError> {
    Ok(types.cast_target(ty)?.to_string())
}

/// Oracle collection type name of a plural type, as a semantic error if it
/// cannot be determined.
pub fn collection_type_name(function: &str, ty: Option<&SqlType>) -> Result<String, FunctionError> {
    let plural = ty.and_then(SqlType::as_plural).ok_or_else(|| {
        FunctionError::semantic(function, "could not determine the array type of the call")
    })?;
    oracle_array_type_name(plural).map_err(|message| FunctionError::semantic(function, message))
}
