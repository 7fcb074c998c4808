use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{ENV_DATABASE, ENV_ENDPOINT, ENV_SA_KEY_FILE, READINESS_TIMEOUT_SECS};
use crate::error::{RegistryError, Result};

/// Configuration for reaching the connections table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database endpoint (e.g., "grpcs://ydb.serverless.yandexcloud.net:2135")
    pub endpoint: String,

    /// Database path
    pub database: String,

    /// Service account key file, relative to the working directory
    pub sa_key_file: Option<PathBuf>,

    /// Upper bound on the initial readiness wait
    pub readiness_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    RegistryError::Config(format!("{} environment variable not set", name))
                })
        };

        Ok(Self {
            endpoint: require(ENV_ENDPOINT)?,
            database: require(ENV_DATABASE)?,
            sa_key_file: lookup(ENV_SA_KEY_FILE)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            readiness_timeout: Duration::from_secs(READINESS_TIMEOUT_SECS),
        })
    }

    /// Connection string understood by the database client
    pub fn connection_string(&self) -> String {
        format!("{}?database={}", self.endpoint, self.database)
    }
}
