//! ConnectHandler - Handles the CONNECT lifecycle event
//!
//! Records the new connection ID in the registry.

use tracing::{error, info};
use ws_registry_common::validation::require_connection_id;
use ws_registry_common::{GatewayEvent, Result, StatusResponse};

use crate::registry::ConnectionStore;

/// Handler for CONNECT events
pub async fn handle_connect<S: ConnectionStore>(
    store: &S,
    event: &GatewayEvent,
) -> Result<StatusResponse> {
    let connection_id = require_connection_id(event.connection_id())?;

    info!("New WebSocket connection: {}", connection_id);

    store.register(connection_id).await.map_err(|e| {
        error!("Failed to register connection {}: {}", connection_id, e);
        e
    })?;

    Ok(StatusResponse::ok())
}
