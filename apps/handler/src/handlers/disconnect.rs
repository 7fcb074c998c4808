//! DisconnectHandler - Handles the DISCONNECT lifecycle event
//!
//! Removes the connection ID from the registry. A failed delete is surfaced to
//! the gateway as an invocation failure.

use tracing::{error, info};
use ws_registry_common::validation::require_connection_id;
use ws_registry_common::{GatewayEvent, Result, StatusResponse};

use crate::registry::ConnectionStore;

/// Handler for DISCONNECT events
pub async fn handle_disconnect<S: ConnectionStore>(
    store: &S,
    event: &GatewayEvent,
) -> Result<StatusResponse> {
    let connection_id = require_connection_id(event.connection_id())?;

    info!("WebSocket connection disconnected: {}", connection_id);

    store.unregister(connection_id).await.map_err(|e| {
        error!("Failed to unregister connection {}: {}", connection_id, e);
        e
    })?;

    Ok(StatusResponse::ok())
}
