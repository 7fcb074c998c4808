//! DefaultHandler - Acknowledges data frames and unknown event types

use tracing::debug;
use ws_registry_common::{GatewayEvent, StatusResponse};

/// Handler for every event that is neither CONNECT nor DISCONNECT
pub fn handle_default(event_type: Option<&str>, event: &GatewayEvent) -> StatusResponse {
    debug!(
        "Ignoring {} event for connection {}",
        event_type.unwrap_or("untyped"),
        event.connection_id().unwrap_or("<none>")
    );
    StatusResponse::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handler_acknowledges() {
        let event = GatewayEvent::new("MESSAGE", "abc123");
        assert_eq!(handle_default(Some("MESSAGE"), &event), StatusResponse::ok());
        assert_eq!(handle_default(None, &GatewayEvent::default()), StatusResponse::ok());
    }
}
