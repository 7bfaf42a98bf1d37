use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

pub mod client;
pub mod protocol;
pub mod worker;

pub use protocol::Action;

const MAILBOX_CAPACITY: usize = 32;

/// One request on the wire: an action tag, an uninterpreted JSON payload, and
/// the slot the handler answers into. Exactly one reply per envelope.
pub struct Envelope {
    pub action: Action,
    pub payload: Value,
    pub reply: oneshot::Sender<Result<Value, String>>,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no handler registered for address {0}")]
    NoHandler(String),
    #[error("handler for address {0} is gone")]
    HandlerGone(String),
    #[error("request to {address} timed out after {timeout:?}")]
    Timeout { address: String, timeout: Duration },
    #[error("handler failure: {0}")]
    Handler(String),
}

/// Addressable request/reply channel between the HTTP tier and the storage
/// tier. Each address has at most one registered consumer; the dispatcher
/// routes by address and never looks inside the payload.
pub struct Dispatcher {
    handlers: Mutex<HashMap<String, mpsc::Sender<Envelope>>>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            handlers: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    /// Register the consumer for an address, displacing any previous one.
    /// The returned receiver is the address's mailbox.
    pub fn register(&self, address: &str) -> mpsc::Receiver<Envelope> {
        let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
        self.handlers
            .lock()
            .expect("dispatcher registry lock poisoned")
            .insert(address.to_string(), tx);
        rx
    }

    /// Send a request to an address and await its single reply. Resolves to a
    /// failure when no handler is registered, the handler has gone away, the
    /// handler reports an error, or no reply arrives within the timeout.
    pub async fn request(
        &self,
        address: &str,
        action: Action,
        payload: Value,
    ) -> Result<Value, DispatchError> {
        let sender = self
            .handlers
            .lock()
            .expect("dispatcher registry lock poisoned")
            .get(address)
            .cloned()
            .ok_or_else(|| DispatchError::NoHandler(address.to_string()))?;

        let (reply_tx, reply_rx) = oneshot::channel();
        let envelope = Envelope {
            action,
            payload,
            reply: reply_tx,
        };

        sender
            .send(envelope)
            .await
            .map_err(|_| DispatchError::HandlerGone(address.to_string()))?;

        match tokio::time::timeout(self.timeout, reply_rx).await {
            Err(_) => Err(DispatchError::Timeout {
                address: address.to_string(),
                timeout: self.timeout,
            }),
            // the handler dropped the reply slot without answering
            Ok(Err(_)) => Err(DispatchError::HandlerGone(address.to_string())),
            Ok(Ok(Err(cause))) => Err(DispatchError::Handler(cause)),
            Ok(Ok(Ok(value))) => Ok(value),
        }
    }
}
