//! DDL type names used by casts in rendered SQL.

use super::Dialect;
use crate::function::error::FunctionError;
use crate::function::types::{ArrayStorage, PluralType, SqlType};
use arrow::datatypes::DataType;
use sqlparser::ast::{
    ArrayElemTypeDef, DataType as SqlDataType, ExactNumberInfo, Ident, ObjectName,
    TimezoneInfo,
};

pub trait TypeMapper: Send + Sync {
    fn map_type(&self, data_type: &DataType) -> Result<SqlDataType, FunctionError>;

    fn map_plural(&self, plural: &PluralType) -> Result<SqlDataType, FunctionError>;

    fn cast_target(&self, ty: &SqlType) -> Result<SqlDataType, FunctionError> {
        match ty {
            SqlType::Basic(data_type) => self.map_type(data_type),
            SqlType::Plural(plural) => self.map_plural(plural),
        }
    }
}

/// Per-dialect DDL registry.
#[derive(Debug, Clone, Copy)]
pub struct DdlTypeRegistry {
    dialect: Dialect,
}

impl DdlTypeRegistry {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// `decimal(p,s)`. Arrow allows a negative scale, which only Oracle's
    /// `number` can express.
    fn decimal(&self, precision: u8, scale: i8) -> Result<SqlDataType, FunctionError> {
        let scale = u64::try_from(scale).map_err(|_| FunctionError::TypeMapping {
            dialect: self.dialect.name().to_string(),
            message: format!("Negative decimal scale {} is not supported", scale),
        })?;
        Ok(SqlDataType::Decimal(ExactNumberInfo::PrecisionAndScale(
            u64::from(precision),
            scale,
        )))
    }

    fn unsupported(&self, what: impl std::fmt::Display) -> FunctionError {
        FunctionError::TypeMapping {
            dialect: self.dialect.name().to_string(),
            message: format!("Unsupported type for casting: {}", what),
        }
    }
}

fn custom(name: &str) -> SqlDataType {
    SqlDataType::Custom(ObjectName::from(vec![Ident::new(name)]), vec![])
}


impl TypeMapper for DdlTypeRegistry {
    fn map_type(&self, data_type: &DataType) -> Result<SqlDataType, FunctionError> {
        use Dialect::*;
        let mapped = match (self.dialect, data_type) {
            (Oracle, DataType::Boolean) => custom("number(1,0)"),
            (SqlServer | Sybase, DataType::Boolean) => custom("bit"),
            (_, DataType::Boolean) => SqlDataType::Boolean,

            (Oracle, DataType::Int8) => custom("number(3,0)"),
            (PostgreSql | CockroachDb | GaussDb | Db2, DataType::Int8) => {
                SqlDataType::SmallInt(None)
            }
            (_, DataType::Int8) => SqlDataType::TinyInt(None),
            (Oracle, DataType::Int16) => custom("number(5,0)"),
            (_, DataType::Int16) => SqlDataType::SmallInt(None),
            (Oracle, DataType::Int32) => custom("number(10,0)"),
            (SqlServer | Sybase, DataType::Int32) => custom("int"),
            (_, DataType::Int32) => SqlDataType::Integer(None),
            (Oracle, DataType::Int64) => custom("number(19,0)"),
            (_, DataType::Int64) => SqlDataType::BigInt(None),

            (Oracle, DataType::Float32) => custom("binary_float"),
            (_, DataType::Float32) => SqlDataType::Real,
            (Oracle, DataType::Float64) => custom("binary_double"),
            (Db2 | Hana, DataType::Float64) => custom("double"),
            (SqlServer, DataType::Float64) => custom("float"),
            (_, DataType::Float64) => SqlDataType::DoublePrecision,

            (Oracle, DataType::Decimal128(p, s)) => custom(&format!("number({},{})", p, s)),
            (_, DataType::Decimal128(p, s)) => self.decimal(*p, *s)?,

            (_, DataType::Utf8 | DataType::LargeUtf8) => match self.dialect {
                Oracle => custom("varchar2(4000 char)"),
                HSql => custom("varchar(32768)"),
                Db2 => custom("varchar(32672)"),
                SqlServer => custom("nvarchar(max)"),
                Sybase => custom("varchar(16384)"),
                Hana => custom("nvarchar(5000)"),
                PostgreSql | CockroachDb | GaussDb | H2 => SqlDataType::Varchar(None),
            },

            (_, DataType::Date32 | DataType::Date64) => SqlDataType::Date,
            (_, DataType::Timestamp(_, tz)) => match (self.dialect, tz.is_some()) {
                (Oracle, false) => custom("timestamp(6)"),
                (Oracle, true) => custom("timestamp(6) with time zone"),
                (SqlServer, false) => custom("datetime2(6)"),
                (SqlServer, true) => custom("datetimeoffset(6)"),
                (Sybase, _) => custom("datetime"),
                (Db2, _) => custom("timestamp(6)"),
                (_, true) => SqlDataType::Timestamp(None, TimezoneInfo::WithTimeZone),
                (_, false) => SqlDataType::Timestamp(None, TimezoneInfo::None),
            },

            (_, DataType::Binary | DataType::LargeBinary) => match self.dialect {
                PostgreSql | CockroachDb | GaussDb => SqlDataType::Bytea,
                Oracle => custom("blob"),
                Db2 => custom("varbinary(32672)"),
                SqlServer => custom("varbinary(max)"),
                Sybase => custom("varbinary(16384)"),
                Hana => custom("varbinary(5000)"),
                H2 | HSql => custom("varbinary"),
            },

            _ => return Err(self.unsupported(data_type)),
        };
        Ok(mapped)
    }

    fn map_plural(&self, plural: &PluralType) -> Result<SqlDataType, FunctionError> {
        match plural.storage {
            ArrayStorage::Json => {
                return match self.dialect {
                    Dialect::PostgreSql | Dialect::CockroachDb | Dialect::GaussDb => {
                        Ok(custom("jsonb"))
                    }
                    Dialect::Oracle | Dialect::H2 => Ok(custom("json")),
                    Dialect::SqlServer => Ok(custom("nvarchar(max)")),
                    Dialect::Db2 => Ok(custom("clob")),
                    Dialect::Hana => Ok(custom("nclob")),
                    Dialect::HSql | Dialect::Sybase => {
                        Err(self.unsupported(SqlType::Plural(plural.clone())))
                    }
                };
            }
            ArrayStorage::Xml => {
                return match self.dialect {
                    Dialect::Oracle => Ok(custom("xmltype")),
                    Dialect::PostgreSql | Dialect::Db2 | Dialect::Sybase => Ok(custom("xml")),
                    Dialect::Hana => Ok(custom("nclob")),
                    _ => Err(self.unsupported(SqlType::Plural(plural.clone()))),
                };
            }
            ArrayStorage::Native => {}
        }

        if plural.is_nested() {
            return Err(self.unsupported(SqlType::Plural(plural.clone())));
        }

        match self.dialect {
            Dialect::PostgreSql | Dialect::CockroachDb | Dialect::GaussDb => Ok(
                SqlDataType::Array(ArrayElemTypeDef::SquareBracket(
                    Box::new(self.map_type(&plural.element)?),
                    None,
                )),
            ),
            Dialect::H2 | Dialect::HSql => {
                let element = self.map_type(&plural.element)?;
                Ok(custom(&format!("{} array", element)))
            }
            Dialect::Oracle => Ok(custom(&oracle_array_type_name(plural).map_err(
                |_| self.unsupported(SqlType::Plural(plural.clone())),
            )?)),
            Dialect::Db2 | Dialect::SqlServer | Dialect::Sybase | Dialect::Hana => {
                Err(FunctionError::TypeMapping {
                    dialect: self.dialect.name().to_string(),
                    message: "array types are not supported".to_string(),
                })
            }
        }
    }
}

/// Name of the Oracle collection type that holds values of this plural type.
///
/// Collection types are created per element type as `<Element>Array` unless
/// the mapping names one explicitly.
pub fn oracle_array_type_name(plural: &PluralType) -> Result<String, String> {
    if let Some(name) = &plural.type_name {
        return Ok(name.clone());
    }
    let element = match &plural.element {
        DataType::Boolean => "Boolean",
        DataType::Int8 => "Byte",
        DataType::Int16 => "Short",
        DataType::Int32 => "Integer",
        DataType::Int64 => "Long",
        DataType::Float32 => "Float",
        DataType::Float64 => "Double",
        DataType::Decimal128(_, _) => "BigDecimal",
        DataType::Utf8 | DataType::LargeUtf8 => "String",
        DataType::Date32 | DataType::Date64 => "Date",
        DataType::Timestamp(_, _) => "Timestamp",
        other => return Err(format!("no collection type for element type {}", other)),
    };
    Ok(format!("{}Array", element))
}
