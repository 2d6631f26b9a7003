//! # Error Contexts
//!
//! Structured metadata attached to errors for programmatic analysis.

use serde::{Deserialize, Serialize};

/// Structured context for errors.
///
/// Each variant provides the fields relevant to that error type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorContext {
    /// Context for PLURAL-2001..2003 (argument errors)
    FunctionArgument {
        function: String,
        /// 0-based index of the offending argument, if a single one is at fault
        argument_index: Option<usize>,
        expected: Option<String>,
        actual: Option<String>,
    },

    /// Context for errors that depend on the target dialect
    Dialect {
        dialect: String,
        function: Option<String>,
        reason: String,
    },

    /// Context for PLURAL-2006 (UnknownFunction)
    UnknownFunction {
        function: String,
        dialect: String,
        available_functions: Vec<String>,
    },

    /// Context for PLURAL-3001/3002 (config errors)
    Config {
        file_path: Option<String>,
        field: Option<String>,
    },

    /// Generic key-value context for extensibility
    Generic {
        #[serde(flatten)]
        data: std::collections::HashMap<String, serde_json::Value>,
    },
}
