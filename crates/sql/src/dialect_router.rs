//! Maps configured database names to dialects.
//!
//! The `route_dialect` function is the main entry point, mapping a database
//! name (e.g., "postgres", "oracle") to its `Dialect`.

use crate::dialects::{Dialect, FunctionRegistry};
use plural_common::config::ArrayFunctionSettings;
use plural_error::{find_closest_match, ErrorCode, ErrorContext, PluralError};

const KNOWN_NAMES: &[&str] = &[
    "postgres",
    "postgresql",
    "cockroachdb",
    "gaussdb",
    "oracle",
    "h2",
    "hsqldb",
    "db2",
    "sqlserver",
    "sybase",
    "hana",
];

pub fn route_dialect(name: &str) -> Option<Dialect> {
    match name.to_lowercase().as_str() {
        "postgres" | "postgresql" | "pg" => Some(Dialect::PostgreSql),
        "cockroach" | "cockroachdb" => Some(Dialect::CockroachDb),
        "gauss" | "gaussdb" | "opengauss" => Some(Dialect::GaussDb),
        "oracle" => Some(Dialect::Oracle),
        "h2" => Some(Dialect::H2),
        "hsql" | "hsqldb" => Some(Dialect::HSql),
        "db2" => Some(Dialect::Db2),
        "sqlserver" | "mssql" => Some(Dialect::SqlServer),
        "sybase" | "ase" => Some(Dialect::Sybase),
        "hana" | "saphana" => Some(Dialect::Hana),
        _ => {
            tracing::warn!(dialect = %name, "No dialect registered for database name");
            None
        }
    }
}

/// Builds the function registry for a configured database name.
pub fn registry_for(
    name: &str,
    settings: &ArrayFunctionSettings,
) -> Result<FunctionRegistry, PluralError> {
    let dialect = route_dialect(name).ok_or_else(|| {
        let known: Vec<String> = KNOWN_NAMES.iter().map(ToString::to_string).collect();
        let mut error = PluralError::new(
            ErrorCode::UnknownDialect,
            format!("Unknown database dialect '{}'", name),
        )
        .with_context(ErrorContext::Config {
            file_path: None,
            field: Some("dialect".to_string()),
        });
        if let Some(suggestion) = find_closest_match(name, &known) {
            error = error.with_hint(format!("Did you mean '{}'?", suggestion));
        }
        error
    })?;
    Ok(FunctionRegistry::for_dialect(dialect, settings))
}
