//! Credential resolution
//!
//! A configured service account key file wins; without one, tokens come from the
//! metadata service of the environment the function runs in.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use ws_registry_common::{Config, RegistryError, Result};
use ydb::{ClientBuilder, MetadataUrlCredentials, ServiceAccountCredentials};

/// How the database client authenticates
pub enum CredentialStrategy {
    ServiceAccount(ServiceAccountCredentials),
    Metadata,
}

impl fmt::Debug for CredentialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialStrategy::ServiceAccount(_) => f.write_str("ServiceAccount"),
            CredentialStrategy::Metadata => f.write_str("Metadata"),
        }
    }
}

impl CredentialStrategy {
    /// Install the strategy's credentials on a client builder
    pub fn apply(self, builder: ClientBuilder) -> ClientBuilder {
        match self {
            CredentialStrategy::ServiceAccount(credentials) => builder.with_credentials(credentials),
            CredentialStrategy::Metadata => builder.with_credentials(MetadataUrlCredentials::new()),
        }
    }
}

/// Pick the credential strategy for the given configuration
pub fn resolve_credentials(config: &Config) -> Result<CredentialStrategy> {
    match &config.sa_key_file {
        Some(path) => {
            let path = key_file_path(path);
            let credentials = ServiceAccountCredentials::from_file(&path).map_err(|e| {
                RegistryError::Credential(format!(
                    "Failed to load key file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Using service account key file {}", path.display());
            Ok(CredentialStrategy::ServiceAccount(credentials))
        }
        None => {
            debug!("No service account key file configured, using metadata service");
            Ok(CredentialStrategy::Metadata)
        }
    }
}

/// Key file paths are resolved against the working directory
pub fn key_file_path(path: &Path) -> PathBuf {
    Path::new(".").join(path)
}
