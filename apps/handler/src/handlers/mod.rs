//! Handler modules
//!
//! One handler per lifecycle phase the gateway reports. Connect and disconnect
//! touch the registry; everything else is acknowledged as is.

pub mod connect;
pub mod default;
pub mod disconnect;


pub use connect::handle_connect;
pub use default::handle_default;
pub use disconnect::handle_disconnect;
