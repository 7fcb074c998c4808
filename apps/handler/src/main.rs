//! Connection Registry Handler
//!
//! Serverless entry point for the gateway's WebSocket lifecycle events:
//! - CONNECT - register the connection ID
//! - DISCONNECT - unregister the connection ID
//! - anything else - acknowledge without touching the registry
//!
//! If the database does not become ready on the first invocation the process
//! exits with status 1 instead of serving traffic.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ws_registry_common::constants::ENV_LOG_LEVEL;
use ws_registry_common::{Config, GatewayEvent, StatusResponse};
use ws_registry_handler::{Dispatcher, YdbConnector};

async fn function_handler(
    event: LambdaEvent<Value>,
    dispatcher: &Dispatcher<YdbConnector>,
) -> Result<StatusResponse, Error> {
    info!("Received event: {}", event.payload);

    let gateway_event: GatewayEvent = serde_json::from_value(event.payload)
        .map_err(|e| format!("Failed to parse gateway event: {}", e))?;

    match dispatcher.dispatch(&gateway_event).await {
        Ok(response) => Ok(response),
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(ENV_LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    info!("Connection registry handler starting");

    let config = Config::from_env()?;
    info!(
        "Registry database {} at {}",
        config.database, config.endpoint
    );

    let dispatcher = Dispatcher::new(YdbConnector::new(config));

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(event, &dispatcher)
    }))
    .await
}
