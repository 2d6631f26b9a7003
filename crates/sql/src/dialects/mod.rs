//! Target databases and their capabilities.
//!
//! Each dialect owns one `FunctionRegistry` (see `registry`) built once at
//! startup and shared read-only by every query compilation.

pub mod h2;
pub mod hsql;
pub mod oracle;
pub mod postgres;
pub mod registry;
pub mod type_mapper;

pub use registry::FunctionRegistry;
pub use type_mapper::{DdlTypeRegistry, TypeMapper};

use crate::function::null_safe::NullSafeEquality;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    PostgreSql,
    CockroachDb,
    GaussDb,
    Oracle,
    H2,
    HSql,
    Db2,
    SqlServer,
    Sybase,
    Hana,
}

impl Dialect {
    pub const ALL: [Dialect; 10] = [
        Dialect::PostgreSql,
        Dialect::CockroachDb,
        Dialect::GaussDb,
        Dialect::Oracle,
        Dialect::H2,
        Dialect::HSql,
        Dialect::Db2,
        Dialect::SqlServer,
        Dialect::Sybase,
        Dialect::Hana,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::CockroachDb => "CockroachDB",
            Dialect::GaussDb => "GaussDB",
            Dialect::Oracle => "Oracle",
            Dialect::H2 => "H2",
            Dialect::HSql => "HSQLDB",
            Dialect::Db2 => "DB2",
            Dialect::SqlServer => "SQL Server",
            Dialect::Sybase => "Sybase ASE",
            Dialect::Hana => "SAP HANA",
        }
    }

    /// Dialects that store arrays in columns and get the array function family.
    pub fn supports_array_functions(&self) -> bool {
        matches!(
            self,
            Dialect::PostgreSql
                | Dialect::CockroachDb
                | Dialect::GaussDb
                | Dialect::Oracle
                | Dialect::H2
                | Dialect::HSql
        )
    }

    pub fn is_postgres_family(&self) -> bool {
        matches!(
            self,
            Dialect::PostgreSql | Dialect::CockroachDb | Dialect::GaussDb
        )
    }

    /// How this dialect spells null-safe comparison.
    pub fn null_safe_equality(&self) -> NullSafeEquality {
        match self {
            Dialect::PostgreSql
            | Dialect::CockroachDb
            | Dialect::GaussDb
            | Dialect::H2
            | Dialect::HSql
            | Dialect::Db2 => NullSafeEquality::DistinctFrom,
            Dialect::Oracle => NullSafeEquality::Decode,
            Dialect::SqlServer | Dialect::Sybase | Dialect::Hana => NullSafeEquality::CaseWhen,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
