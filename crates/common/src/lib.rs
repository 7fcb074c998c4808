//! Common utilities and types for the connection registry
//!
//! This crate provides configuration, the error taxonomy, gateway event models and
//! input validation shared by the serverless handler and the operator CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{RegistryError, Result};
pub use models::{ConnectionRecord, GatewayEvent, LifecycleEvent, RequestContext, StatusResponse};
