use std::time::Duration;

use thiserror::Error;

use crate::validation::ValidationError;

/// Error types for the connection registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Database handle has not become ready in {}ms", .0.as_millis())]
    ReadinessTimeout(Duration),

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RegistryError {
    /// Errors the process cannot recover from; the entry point terminates on these
    pub fn is_fatal(&self) -> bool {
        matches!(self, RegistryError::ReadinessTimeout(_))
    }
}

/// Type alias for Results using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;
