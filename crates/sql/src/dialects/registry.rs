//! Function Registry
//!
//! Per-dialect registry of array function descriptors, built once at startup
//! and looked up by name during query compilation.

use super::Dialect;
use crate::function::descriptor::FunctionDescriptor;
use crate::function::error::FunctionError;
use crate::unnest::{UnnestFunction, UnnestStrategy};
use plural_common::config::ArrayFunctionSettings;
use std::collections::HashMap;

#[derive(Clone)]
pub struct FunctionRegistry {
    dialect: Dialect,
    functions: HashMap<String, FunctionDescriptor>,
    unnest: Option<UnnestFunction>,
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("dialect", &self.dialect)
            .field("functions_count", &self.functions.len())
            .field("unnest", &self.unnest.is_some())
            .finish()
    }
}

impl FunctionRegistry {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            functions: HashMap::new(),
            unnest: None,
        }
    }

    /// Registry with the functions `dialect` supports.
    pub fn for_dialect(dialect: Dialect, settings: &ArrayFunctionSettings) -> Self {
        let registry = match dialect {
            Dialect::PostgreSql | Dialect::CockroachDb | Dialect::GaussDb => {
                super::postgres::postgresql_functions(dialect)
            }
            Dialect::Oracle => super::oracle::oracle_functions(),
            Dialect::H2 => super::h2::h2_functions(settings),
            Dialect::HSql => super::hsql::hsql_functions(),
            Dialect::Db2 => Self::new(dialect).with_unnest(UnnestStrategy::Db2 {
                maximum_array_size: settings.maximum_array_size,
            }),
            Dialect::SqlServer => Self::new(dialect).with_unnest(UnnestStrategy::SqlServer),
            Dialect::Sybase => Self::new(dialect).with_unnest(UnnestStrategy::Sybase),
            Dialect::Hana => Self::new(dialect).with_unnest(UnnestStrategy::Hana),
        };
        tracing::debug!(
            dialect = %dialect,
            functions = registry.functions.len(),
            "Registered array functions"
        );
        registry
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Add a function under its own name
    pub fn register(mut self, descriptor: FunctionDescriptor) -> Self {
        self.functions
            .insert(descriptor.name().to_lowercase(), descriptor);
        self
    }

    /// Add a function under an additional name
    pub fn register_alias(self, alias: &str, descriptor: FunctionDescriptor) -> Self {
        self.register(descriptor.with_name(alias))
    }

    pub fn with_unnest(mut self, strategy: UnnestStrategy) -> Self {
        self.unnest = Some(UnnestFunction::new(strategy));
        self
    }

    pub fn find(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.get(name.to_lowercase().as_str())
    }

    /// Like `find`, but an unknown name is an error listing what is available.
    pub fn get(&self, name: &str) -> Result<&FunctionDescriptor, FunctionError> {
        self.find(name).ok_or_else(|| FunctionError::UnknownFunction {
            name: name.to_string(),
            dialect: self.dialect.name().to_string(),
            available: self.function_names(),
        })
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name.to_lowercase().as_str())
    }

    pub fn unnest(&self) -> Result<&UnnestFunction, FunctionError> {
        self.unnest.as_ref().ok_or_else(|| {
            FunctionError::unsupported(
                crate::unnest::UNNEST,
                self.dialect.name(),
                "unnest is not supported",
            )
        })
    }

    /// Registered names, sorted.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and signature of every registered function, for catalogs and error reports.
    pub fn describe(&self) -> serde_json::Value {
        let functions: Vec<serde_json::Value> = self
            .function_names()
            .iter()
            .filter_map(|name| self.functions.get(name))
            .map(|descriptor| {
                serde_json::json!({
                    "name": descriptor.name(),
                    "signature": descriptor.signature(),
                })
            })
            .collect();
        serde_json::json!({
            "dialect": self.dialect.name(),
            "functions": functions,
            "unnest": self.unnest.is_some(),
        })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
