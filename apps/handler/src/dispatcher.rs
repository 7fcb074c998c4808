//! Event dispatcher
//!
//! Routes each gateway event by its lifecycle phase. The store is built lazily on
//! the first dispatch and shared by every later one; a failed initialization
//! leaves nothing behind, so the next event tries again.

use tokio::sync::OnceCell;
use tracing::info;
use ws_registry_common::{GatewayEvent, LifecycleEvent, RegistryError, Result, StatusResponse};

use crate::handlers::{handle_connect, handle_default, handle_disconnect};
use crate::registry::StoreConnector;

pub struct Dispatcher<C: StoreConnector> {
    connector: C,
    store: OnceCell<C::Store>,
}

impl<C: StoreConnector> Dispatcher<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            store: OnceCell::new(),
        }
    }

    /// The shared store, initialized on first use
    pub async fn store(&self) -> Result<&C::Store> {
        self.store
            .get_or_try_init(|| async {
                let store = self.connector.connect().await?;
                info!("Connection registry initialized");
                Ok::<_, RegistryError>(store)
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    /// Handle one gateway event
    pub async fn dispatch(&self, event: &GatewayEvent) -> Result<StatusResponse> {
        let store = self.store().await?;

        match event.lifecycle() {
            LifecycleEvent::Connect => handle_connect(store, event).await,
            LifecycleEvent::Disconnect => handle_disconnect(store, event).await,
            LifecycleEvent::Other(event_type) => Ok(handle_default(event_type.as_deref(), event)),
        }
    }
}
