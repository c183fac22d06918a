use async_trait::async_trait;
use paircall_client::{RelayError, RelayOutput};
use paircall_core::RelayMessage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// RelayOutput double that captures everything the session sends.
#[derive(Clone)]
pub struct MockRelay {
    tx: mpsc::UnboundedSender<RelayMessage>,
    sent: Arc<Mutex<Vec<RelayMessage>>>,
    closed: Arc<AtomicBool>,
}

impl MockRelay {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RelayMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let relay = Self {
            tx,
            sent: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
        };
        (relay, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    pub fn sent(&self) -> Vec<RelayMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_kinds(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().iter().map(|m| m.kind()).collect()
    }

    pub fn count_kind(&self, kind: &str) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.kind() == kind)
            .count()
    }

    /// First captured answer payload, if any.
    pub fn first_answer(&self) -> Option<RelayMessage> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .find(|m| matches!(m, RelayMessage::Answer { .. }))
            .cloned()
    }

    /// First captured offer payload, if any.
    pub fn first_offer(&self) -> Option<RelayMessage> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .find(|m| matches!(m, RelayMessage::Offer { .. }))
            .cloned()
    }
}

#[async_trait]
impl RelayOutput for MockRelay {
    async fn send(&self, msg: RelayMessage) -> Result<(), RelayError> {
        tracing::debug!(kind = msg.kind(), room = %msg.room(), "[MockRelay] send");
        self.sent.lock().unwrap().push(msg.clone());
        let _ = self.tx.send(msg);
        Ok(())
    }

    async fn close(&self) -> Result<(), RelayError> {
        self.closed.store(true, Ordering::Relaxed);
        Ok(())
    }
}

/// RelayOutput double whose sends always fail, as if the connection died
/// between connect and the first message.
#[derive(Clone, Default)]
pub struct FailingRelay;

#[async_trait]
impl RelayOutput for FailingRelay {
    async fn send(&self, _msg: RelayMessage) -> Result<(), RelayError> {
        Err(RelayError::Closed)
    }
}
