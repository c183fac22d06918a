mod ws_relay;

pub use ws_relay::WsRelay;

use crate::error::RelayError;
use async_trait::async_trait;
use paircall_core::RelayMessage;

/// Outbound half of the signaling relay connection. The relay is assumed to
/// deliver messages FIFO per room; it does not suppress duplicates, so the
/// engine treats duplicate candidates as ignorable.
#[async_trait]
pub trait RelayOutput: Send + Sync {
    async fn send(&self, msg: RelayMessage) -> Result<(), RelayError>;

    /// Shuts the relay link down. No-op by default for relays without a
    /// dedicated teardown step.
    async fn close(&self) -> Result<(), RelayError> {
        Ok(())
    }
}
