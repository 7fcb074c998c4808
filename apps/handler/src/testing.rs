//! In-memory doubles for the registry seams

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ws_registry_common::{RegistryError, Result};

use crate::{ConnectionStore, StoreConnector};

/// Connections table kept in a vector, with upsert semantics on register
#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: Mutex<Vec<String>>,
    failing: bool,
}

impl MemoryStore {
    /// A store whose every statement fails
    pub fn failing() -> Self {
        Self {
            ids: Mutex::default(),
            failing: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(RegistryError::Query("store unavailable".to_string()));
        }
        Ok(())
    }
}

impl ConnectionStore for MemoryStore {
    async fn register(&self, id: &str) -> Result<()> {
        self.check()?;
        let mut ids = self.ids.lock().unwrap();
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
        Ok(())
    }

    async fn unregister(&self, id: &str) -> Result<()> {
        self.check()?;
        self.ids.lock().unwrap().retain(|existing| existing != id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.ids.lock().unwrap().clone())
    }
}

/// What the counting connector does on each `connect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Ready,
    FailingStore,
    CredentialError,
    NotReady,
}

/// Connector that records how many times initialization ran
#[derive(Debug, Clone)]
pub struct CountingConnector {
    calls: Arc<AtomicUsize>,
    outcomes: Arc<Mutex<Vec<ConnectOutcome>>>,
}

impl CountingConnector {
    pub fn new() -> Self {
        Self::with_outcomes(Vec::new())
    }

    /// Outcomes are consumed in order; once exhausted every call is `Ready`
    pub fn with_outcomes(outcomes: Vec<ConnectOutcome>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcomes: Arc::new(Mutex::new(outcomes)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StoreConnector for CountingConnector {
    type Store = MemoryStore;

    async fn connect(&self) -> Result<MemoryStore> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                ConnectOutcome::Ready
            } else {
                outcomes.remove(0)
            }
        };

        match outcome {
            ConnectOutcome::Ready => Ok(MemoryStore::default()),
            ConnectOutcome::FailingStore => Ok(MemoryStore::failing()),
            ConnectOutcome::CredentialError => Err(RegistryError::Credential(
                "key file authorized_key.json not found".to_string(),
            )),
            ConnectOutcome::NotReady => {
                Err(RegistryError::ReadinessTimeout(Duration::from_secs(10)))
            }
        }
    }
}
