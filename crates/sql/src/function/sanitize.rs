use super::error::FunctionError;
use sqlparser::ast::Ident;

/// Rejects names that could break out of an identifier position in rendered SQL.
pub fn validate_identifier(name: &str) -> Result<(), FunctionError> {
    if name.is_empty() {
        return Err(FunctionError::InvalidIdentifier("empty".to_string()));
    }
    if name.len() > 128 {
        return Err(FunctionError::InvalidIdentifier(format!(
            "too long: {}",
            name.len()
        )));
    }
    if name.contains('"')
        || name.contains('\x00')
        || name.contains(';')
        || name.contains('`')
        || name.contains('\\')
        || name.contains('\'')
        || name.chars().any(char::is_whitespace)
    {
        return Err(FunctionError::InvalidIdentifier(format!(
            "forbidden characters in: {}",
            name
        )));
    }
    Ok(())
}

pub fn safe_ident(name: &str) -> Result<Ident, FunctionError> {
    validate_identifier(name)?;
    Ok(Ident::new(name))
}
