//! Type model of function arguments.
//!
//! A `SqlType` is what the upstream compiler resolved an expression to: either
//! a basic value type or a plural (array/list) type with a single element type.

use arrow::datatypes::DataType;
use std::fmt;

/// Whether a plural type is exposed as an array or as a list.
///
/// Both share the same storage, the distinction only matters for the return
/// types of functions with a `_list` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Array,
    List,
}

/// How the database physically stores the array value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayStorage {
    /// A real array/collection type of the database
    Native,
    /// A JSON document holding a JSON array
    Json,
    /// An XML document of the form `<Collection><e>..</e></Collection>`
    Xml,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluralType {
    pub collection: CollectionKind,
    pub element: DataType,
    pub storage: ArrayStorage,
    /// Explicit database type name, e.g. a named Oracle collection type
    pub type_name: Option<String>,
}

impl PluralType {
    pub fn array(element: DataType) -> Self {
        Self {
            collection: CollectionKind::Array,
            element,
            storage: ArrayStorage::Native,
            type_name: None,
        }
    }

    pub fn list(element: DataType) -> Self {
        Self {
            collection: CollectionKind::List,
            ..Self::array(element)
        }
    }

    pub fn with_storage(mut self, storage: ArrayStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_collection(mut self, collection: CollectionKind) -> Self {
        self.collection = collection;
        self
    }

    /// An element that is itself a list makes this an array of arrays.
    pub fn is_nested(&self) -> bool {
        is_list_type(&self.element)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.element, DataType::Struct(_))
    }

    /// Two plural types hold the same values if their element types agree,
    /// regardless of array vs. list exposure or explicit naming.
    pub fn same_elements(&self, other: &PluralType) -> bool {
        self.element == other.element
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    Basic(DataType),
    Plural(PluralType),
}

impl SqlType {
    pub fn array_of(element: DataType) -> Self {
        SqlType::Plural(PluralType::array(element))
    }

    pub fn list_of(element: DataType) -> Self {
        SqlType::Plural(PluralType::list(element))
    }

    pub fn boolean() -> Self {
        SqlType::Basic(DataType::Boolean)
    }

    pub fn integer() -> Self {
        SqlType::Basic(DataType::Int32)
    }

    pub fn string() -> Self {
        SqlType::Basic(DataType::Utf8)
    }

    pub fn as_plural(&self) -> Option<&PluralType> {
        match self {
            SqlType::Plural(plural) => Some(plural),
            SqlType::Basic(_) => None,
        }
    }

    pub fn as_basic(&self) -> Option<&DataType> {
        match self {
            SqlType::Basic(data_type) => Some(data_type),
            SqlType::Plural(_) => None,
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, SqlType::Plural(_))
    }

    /// The `Null` data type is what an untyped `NULL` literal resolves to.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlType::Basic(DataType::Null))
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Basic(data_type) => write!(f, "{}", data_type),
            SqlType::Plural(plural) => {
                let kind = match plural.collection {
                    CollectionKind::Array => "ARRAY",
                    CollectionKind::List => "LIST",
                };
                write!(f, "{}<{}>", kind, plural.element)?;
                match plural.storage {
                    ArrayStorage::Native => Ok(()),
                    ArrayStorage::Json => write!(f, " AS JSON"),
                    ArrayStorage::Xml => write!(f, " AS XML"),
                }
            }
        }
    }
}

pub(crate) fn is_list_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::List(_) | DataType::LargeList(_) | DataType::FixedSizeList(_, _)
    )
}
