//! Input validation for gateway-supplied data
//!
//! Connection ids are bound as query parameters, so validation only guards against
//! values no gateway would produce: empty ids, oversized ids and control characters
//! that would poison logs.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::MAX_CONNECTION_ID_LENGTH;

/// Regex for validating connection IDs (1..=256 characters, no control characters)
static CONNECTION_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[^\p{{Cc}}]{{1,{}}}$", MAX_CONNECTION_ID_LENGTH))
        .expect("connection id pattern is valid")
});

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing connection ID")]
    MissingConnectionId,

    #[error("Invalid connection ID format: {0}")]
    InvalidConnectionId(String),
}

/// Validate connection ID format
///
/// # Examples
///
/// ```
/// use ws_registry_common::validation::validate_connection_id;
///
/// assert!(validate_connection_id("d0ek9b2d7qc1uea2lcf0").is_ok());
/// assert!(validate_connection_id("").is_err());
/// ```
pub fn validate_connection_id(id: &str) -> Result<(), ValidationError> {
    if !CONNECTION_ID_REGEX.is_match(id) {
        return Err(ValidationError::InvalidConnectionId(
            id.chars()
                .filter(|c| !c.is_control())
                .take(50)
                .collect::<String>(), // Limit error message
        ));
    }
    Ok(())
}

/// Extract and validate a connection ID that may be absent from the event
pub fn require_connection_id(id: Option<&str>) -> Result<&str, ValidationError> {
    let id = id.ok_or(ValidationError::MissingConnectionId)?;
    validate_connection_id(id)?;
    Ok(id)
}
