//! YDB-backed connection registry
//!
//! [`YdbConnector`] builds the process-wide client and waits for it to become
//! ready; [`YdbStore`] runs the registry statements, each inside its own
//! transaction on a pooled session. Statements are attempted exactly once.

use tracing::{debug, info};
use ws_registry_common::{Config, RegistryError, Result};
use ydb::{Client, ClientBuilder, Query, YdbError, YdbOrCustomerError, ydb_params};

use crate::credentials::resolve_credentials;
use crate::registry::{
    ConnectionStore, DELETE_CONNECTION, SELECT_CONNECTIONS, StoreConnector, UPSERT_CONNECTION,
};

/// Builds a ready [`YdbStore`] from configuration
#[derive(Debug, Clone)]
pub struct YdbConnector {
    config: Config,
}

impl YdbConnector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl StoreConnector for YdbConnector {
    type Store = YdbStore;

    async fn connect(&self) -> Result<YdbStore> {
        info!("Driver initializing...");

        let credentials = resolve_credentials(&self.config)?;
        let builder = ClientBuilder::new_from_connection_string(self.config.connection_string())
            .map_err(connection_error)?;
        let client = credentials.apply(builder).client().map_err(connection_error)?;

        let timeout = self.config.readiness_timeout;
        match tokio::time::timeout(timeout, client.wait()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(connection_error(e)),
            Err(_) => return Err(RegistryError::ReadinessTimeout(timeout)),
        }

        info!("Driver ready");
        Ok(YdbStore { client })
    }
}

/// Connections table in YDB
pub struct YdbStore {
    client: Client,
}

impl YdbStore {
    #[cfg(test)]
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run a single parameterized statement that returns no rows
    async fn execute(&self, statement: &'static str, id: &str) -> Result<()> {
        let id = id.to_string();
        self.client
            .table_client()
            .clone_with_no_retry()
            .retry_transaction(|t| {
                let query = Query::new(statement).with_params(ydb_params!("$id" => id.clone()));
                async move {
                    let mut t = t;
                    t.query(query).await?;
                    t.commit().await?;
                    Ok::<_, YdbOrCustomerError>(())
                }
            })
            .await
            .map_err(query_error)
    }
}

impl ConnectionStore for YdbStore {
    async fn register(&self, id: &str) -> Result<()> {
        self.execute(UPSERT_CONNECTION, id).await?;
        debug!("Registered connection {}", id);
        Ok(())
    }

    async fn unregister(&self, id: &str) -> Result<()> {
        self.execute(DELETE_CONNECTION, id).await?;
        debug!("Unregistered connection {}", id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        self.client
            .table_client()
            .clone_with_no_retry()
            .retry_transaction(|t| async move {
                let mut t = t;
                let result = t.query(Query::new(SELECT_CONNECTIONS)).await?;
                t.commit().await?;

                let mut values = Vec::new();
                for mut row in result.into_only_result()?.rows() {
                    let id: Option<String> = row.remove_field(0)?.try_into()?;
                    values.push(id);
                }
                Ok::<_, YdbOrCustomerError>(collect_ids(values))
            })
            .await
            .map_err(query_error)
    }
}

/// NULL ids carry no connection and are left out
fn collect_ids<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values.into_iter().flatten().collect()
}

fn connection_error(e: YdbError) -> RegistryError {
    RegistryError::Connection(e.to_string())
}

fn query_error(e: YdbOrCustomerError) -> RegistryError {
    RegistryError::Query(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(endpoint: &str) -> Config {
        Config {
            endpoint: endpoint.to_string(),
            database: "/local".to_string(),
            sa_key_file: None,
            readiness_timeout: Duration::from_millis(50),
        }
    }

    #[tokio::test]
    async fn test_missing_key_file_fails_before_connecting() {
        let mut config = config("grpc://localhost:2136");
        config.sa_key_file = Some("does-not-exist.json".into());

        let result = YdbConnector::new(config).connect().await;
        assert!(matches!(result, Err(RegistryError::Credential(_))));
    }

    #[test]
    fn test_collect_ids_keeps_store_order_and_skips_nulls() {
        let ids = collect_ids(vec![
            Some("b2".to_string()),
            None,
            Some("a1".to_string()),
        ]);
        assert_eq!(ids, vec!["b2".to_string(), "a1".to_string()]);
        assert!(collect_ids(Vec::new()).is_empty());
    }

    /// Runs against a live database holding a `connections(id Utf8, PRIMARY KEY (id))`
    /// table:
    ///
    /// ```text
    /// YDB_TEST_ENDPOINT=grpc://localhost:2136 YDB_TEST_DATABASE=/local \
    ///     cargo test -p ws-registry-handler -- --ignored
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_ydb_store_register_unregister_list() {
        let Ok(endpoint) = std::env::var("YDB_TEST_ENDPOINT") else {
            eprintln!("YDB_TEST_ENDPOINT not set, skipping");
            return;
        };
        let database = std::env::var("YDB_TEST_DATABASE").unwrap_or_else(|_| "/local".to_string());

        let client = ClientBuilder::new_from_connection_string(format!(
            "{}?database={}",
            endpoint, database
        ))
        .unwrap()
        .client()
        .unwrap();
        tokio::time::timeout(Duration::from_secs(10), client.wait())
            .await
            .expect("database not ready")
            .unwrap();
        let store = YdbStore::new(client);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let id = format!("test-{}-{}", std::process::id(), nanos);
        let absent = format!("{}-absent", id);

        store.register(&id).await.unwrap();
        assert!(store.list().await.unwrap().contains(&id));

        // Deleting an unknown id changes nothing
        let before = store.list().await.unwrap().len();
        store.unregister(&absent).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), before);

        store.unregister(&id).await.unwrap();
        assert!(!store.list().await.unwrap().contains(&id));

        // Quotes are bound as data, not statement text
        let quoted = format!("{}'); DELETE FROM connections; --", id);
        store.register(&quoted).await.unwrap();
        assert!(store.list().await.unwrap().contains(&quoted));
        store.unregister(&quoted).await.unwrap();
    }
}
