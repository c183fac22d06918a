pub mod harness;
pub mod mock_connectivity;
pub mod mock_media;
pub mod mock_relay;

pub use harness::*;
pub use mock_connectivity::*;
pub use mock_media::*;
pub use mock_relay::*;

use std::time::Duration;
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Polls `cond` until it holds or `timeout_ms` elapses.
pub async fn wait_for<F>(cond: F, timeout_ms: u64) -> bool
where
    F: Fn() -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        if cond() {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Lets already-queued session work drain before asserting on a negative.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
