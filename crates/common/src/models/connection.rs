use serde::{Deserialize, Serialize};

/// A row of the connections table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Gateway-assigned connection ID
    pub id: String,
}

impl ConnectionRecord {
    /// Create a new connection record
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<String> for ConnectionRecord {
    fn from(id: String) -> Self {
        Self { id }
    }
}
