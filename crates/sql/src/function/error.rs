use plural_error::{ErrorCode, ErrorContext, PluralError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// Arity or argument type problem detected before rendering
    #[error("{message}")]
    FunctionArgument {
        function: String,
        argument_index: Option<usize>,
        message: String,
    },

    /// The rendering needs a statically known type that could not be resolved
    #[error("Function '{function}': {message}")]
    Semantic { function: String, message: String },

    #[error("Function '{function}' is not supported by {dialect}: {message}")]
    UnsupportedConstruct {
        function: String,
        dialect: String,
        message: String,
    },

    #[error("No {dialect} type name for {message}")]
    TypeMapping { dialect: String, message: String },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Function '{name}' is not registered for {dialect}")]
    UnknownFunction {
        name: String,
        dialect: String,
        available: Vec<String>,
    },
}

impl FunctionError {
    pub fn argument(function: &str, argument_index: usize, message: impl Into<String>) -> Self {
        FunctionError::FunctionArgument {
            function: function.to_string(),
            argument_index: Some(argument_index),
            message: message.into(),
        }
    }

    pub fn arity(function: &str, message: impl Into<String>) -> Self {
        FunctionError::FunctionArgument {
            function: function.to_string(),
            argument_index: None,
            message: message.into(),
        }
    }

    pub fn semantic(function: &str, message: impl Into<String>) -> Self {
        FunctionError::Semantic {
            function: function.to_string(),
            message: message.into(),
        }
    }

    pub fn unsupported(function: &str, dialect: &str, message: impl Into<String>) -> Self {
        FunctionError::UnsupportedConstruct {
            function: function.to_string(),
            dialect: dialect.to_string(),
            message: message.into(),
        }
    }

    pub fn to_plural_error(self, dialect_name: &str) -> PluralError {
        match self {
            FunctionError::FunctionArgument {
                function,
                argument_index,
                message,
            } => {
                let code = if argument_index.is_some() {
                    ErrorCode::ArgumentType
                } else {
                    ErrorCode::ArgumentCount
                };
                PluralError::new(code, message)
                    .with_context(ErrorContext::FunctionArgument {
                        function,
                        argument_index,
                        expected: None,
                        actual: None,
                    })
                    .with_hint("Check the function signature and the argument types")
            }
            FunctionError::Semantic { function, message } => PluralError::new(
                ErrorCode::SemanticError,
                format!("Function '{}': {}", function, message),
            )
            .with_context(ErrorContext::Dialect {
                dialect: dialect_name.to_string(),
                function: Some(function),
                reason: message,
            })
            .with_hint("Add an explicit cast so the result type is known"),
            FunctionError::UnsupportedConstruct {
                function,
                dialect,
                message,
            } => PluralError::new(
                ErrorCode::UnsupportedConstruct,
                format!(
                    "Function '{}' is not supported by {}: {}",
                    function, dialect, message
                ),
            )
            .with_context(ErrorContext::Dialect {
                dialect,
                function: Some(function),
                reason: message,
            })
            .with_hint("Rewrite the query so the argument has the required shape"),
            FunctionError::TypeMapping { dialect, message } => PluralError::new(
                ErrorCode::TypeMapping,
                format!("No {} type name for {}", dialect, message),
            )
            .with_context(ErrorContext::Dialect {
                dialect,
                function: None,
                reason: message,
            }),
            FunctionError::InvalidIdentifier(e) => PluralError::new(
                ErrorCode::InvalidIdentifier,
                format!("Invalid SQL identifier: {}", e),
            )
            .with_hint("Identifiers must be sanitized to prevent SQL injection"),
            FunctionError::UnknownFunction {
                name,
                dialect,
                available,
            } => {
                let hint = plural_error::find_closest_match(&name, &available);
                let mut error = PluralError::new(
                    ErrorCode::UnknownFunction,
                    format!("Function '{}' is not registered for {}", name, dialect),
                )
                .with_context(ErrorContext::UnknownFunction {
                    function: name,
                    dialect: dialect_name.to_string(),
                    available_functions: available,
                });
                if let Some(closest) = hint {
                    error = error.with_hint(format!("Did you mean '{}'?", closest));
                }
                error
            }
        }
    }
}
