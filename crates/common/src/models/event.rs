//! Gateway invocation payloads
//!
//! The gateway delivers WebSocket lifecycle events as JSON objects whose
//! `requestContext` carries the event type and the connection ID. Only those two
//! fields are modelled; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

use crate::constants::STATUS_OK;

/// Inbound gateway event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    pub request_context: RequestContext,
}

/// The `requestContext` object of a gateway event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub connection_id: Option<String>,
}

impl GatewayEvent {
    /// Build an event for the given type and connection
    pub fn new(event_type: impl Into<String>, connection_id: impl Into<String>) -> Self {
        Self {
            request_context: RequestContext {
                event_type: Some(event_type.into()),
                connection_id: Some(connection_id.into()),
            },
        }
    }

    pub fn lifecycle(&self) -> LifecycleEvent {
        LifecycleEvent::parse(self.request_context.event_type.as_deref())
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.request_context.connection_id.as_deref()
    }
}

/// Lifecycle phase of a connection as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Connect,
    Disconnect,
    /// Data frames and anything else the gateway may send
    Other(Option<String>),
}

impl LifecycleEvent {
    pub fn parse(event_type: Option<&str>) -> Self {
        match event_type {
            Some("CONNECT") => LifecycleEvent::Connect,
            Some("DISCONNECT") => LifecycleEvent::Disconnect,
            other => LifecycleEvent::Other(other.map(str::to_string)),
        }
    }
}

/// Response returned to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "statusCode")]
    pub status_code: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status_code: STATUS_OK.to_string(),
        }
    }
}
