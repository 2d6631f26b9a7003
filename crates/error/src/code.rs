use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error codes following PLURAL-XXXX format.
///
/// ## Code Ranges
/// - **2000-2999**: Function call errors (arguments, types, dialect support)
/// - **3000-3999**: Configuration errors
/// - **5000-5999**: Internal errors
///
/// Codes are stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[non_exhaustive]
pub enum ErrorCode {
    // === Function Call Errors (2000-2999) ===
    /// PLURAL-2001: Wrong number of arguments
    ArgumentCount = 2001,
    /// PLURAL-2002: Argument has the wrong type
    ArgumentType = 2002,
    /// PLURAL-2003: Arguments have incompatible types
    TypeMismatch = 2003,
    /// PLURAL-2004: Result type could not be resolved
    SemanticError = 2004,
    /// PLURAL-2005: Construct not supported by the dialect
    UnsupportedConstruct = 2005,
    /// PLURAL-2006: Function is not registered for the dialect
    UnknownFunction = 2006,
    /// PLURAL-2007: Type has no DDL name in the dialect
    TypeMapping = 2007,
    /// PLURAL-2008: Identifier rejected by sanitization
    InvalidIdentifier = 2008,

    // === Configuration Errors (3000-3999) ===
    /// PLURAL-3001: Invalid YAML syntax
    InvalidYaml = 3001,
    /// PLURAL-3002: Configuration failed validation
    InvalidConfig = 3002,
    /// PLURAL-3003: Unknown dialect name
    UnknownDialect = 3003,

    // === Internal Errors (5000-5999) ===
    /// PLURAL-5001: Unexpected internal state
    Internal = 5001,
    /// PLURAL-5002: Serialization/deserialization failed
    SerializationFailed = 5002,
    /// PLURAL-5003: I/O failure
    Io = 5003,

    /// PLURAL-9999: Unknown/unclassified error
    Unknown = 9999,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the formatted code string (e.g., "PLURAL-2002")
    pub fn as_str(&self) -> String {
        format!("PLURAL-{:04}", self.as_u16())
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self.as_u16() {
            2000..=2999 => ErrorCategory::Function,
            3000..=3999 => ErrorCategory::Config,
            _ => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> String {
        code.as_str()
    }
}

impl TryFrom<String> for ErrorCode {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        let num: u16 = s
            .strip_prefix("PLURAL-")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| "Invalid format".to_string())?;
        Self::try_from(num).map_err(|_| "Unknown code".to_string())
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(n: u16) -> std::result::Result<Self, Self::Error> {
        match n {
            2001 => Ok(Self::ArgumentCount),
            2002 => Ok(Self::ArgumentType),
            2003 => Ok(Self::TypeMismatch),
            2004 => Ok(Self::SemanticError),
            2005 => Ok(Self::UnsupportedConstruct),
            2006 => Ok(Self::UnknownFunction),
            2007 => Ok(Self::TypeMapping),
            2008 => Ok(Self::InvalidIdentifier),
            3001 => Ok(Self::InvalidYaml),
            3002 => Ok(Self::InvalidConfig),
            3003 => Ok(Self::UnknownDialect),
            5001 => Ok(Self::Internal),
            5002 => Ok(Self::SerializationFailed),
            5003 => Ok(Self::Io),
            9999 => Ok(Self::Unknown),
            _ => Err(format!("Unknown error code: {}", n)),
        }
    }
}

/// High-level error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCategory {
    Function,
    Config,
    Internal,
}
