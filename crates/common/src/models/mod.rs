mod connection;
mod event;

pub use connection::ConnectionRecord;
pub use event::{GatewayEvent, LifecycleEvent, RequestContext, StatusResponse};
