/// How long the first invocation waits for the database handle to become ready
pub const READINESS_TIMEOUT_SECS: u64 = 10;

/// Table holding one row per active connection
pub const CONNECTIONS_TABLE: &str = "connections";

/// Optional path to a service account authorized key, relative to the working directory
pub const ENV_SA_KEY_FILE: &str = "SA_KEY_FILE";

/// Database endpoint, e.g. `grpcs://ydb.serverless.yandexcloud.net:2135`
pub const ENV_ENDPOINT: &str = "ENDPOINT";

/// Database path, e.g. `/ru-central1/b1g.../etn...`
pub const ENV_DATABASE: &str = "DATABASE";

/// Tracing filter directive for the binaries
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Status returned to the gateway for every handled event
pub const STATUS_OK: &str = "200";

/// Longest connection id accepted from the gateway
pub const MAX_CONNECTION_ID_LENGTH: usize = 256;
