//! Connection registry operations
//!
//! The store and connector traits are the seam between event handling and the
//! database: handlers only see [`ConnectionStore`], and the dispatcher builds the
//! store once through a [`StoreConnector`].

use std::future::Future;

use ws_registry_common::Result;

/// Insert or replace a connection row
pub const UPSERT_CONNECTION: &str = r#"
DECLARE $id AS Utf8;

UPSERT INTO connections (id)
VALUES ($id);
"#;

/// Delete the connection row with an exactly matching ID
pub const DELETE_CONNECTION: &str = r#"
DECLARE $id AS Utf8;

DELETE FROM connections
WHERE id = $id;
"#;

/// Select every stored connection ID, in whatever order the store returns them
pub const SELECT_CONNECTIONS: &str = r#"
SELECT id
FROM connections;
"#;

/// Operations on the connections table
///
/// Each call runs on its own scoped session that is released whether the
/// statement succeeds or fails.
pub trait ConnectionStore: Send + Sync {
    /// Record a new connection
    fn register(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    /// Forget a connection; removing an unknown ID is not an error
    ///
    /// The delete produces no rows, so nothing beyond success is reported.
    fn unregister(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    /// All stored connection IDs, unordered; rows with a NULL id are skipped
    fn list(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Builds a ready [`ConnectionStore`]
pub trait StoreConnector: Send + Sync {
    type Store: ConnectionStore;

    fn connect(&self) -> impl Future<Output = Result<Self::Store>> + Send;
}
