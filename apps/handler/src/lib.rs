//! Connection registry for serverless WebSocket gateways
//!
//! This crate keeps the `connections` table in step with the gateway's lifecycle
//! events: CONNECT inserts the connection ID, DISCONNECT removes it, and anything
//! else is acknowledged without touching the table.

pub mod credentials;
pub mod database;
pub mod dispatcher;
pub mod handlers;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use database::{YdbConnector, YdbStore};
pub use dispatcher::Dispatcher;
pub use registry::{ConnectionStore, StoreConnector};
