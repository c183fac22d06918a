use crate::utils::{CollectSink, MockConnectivity, MockMediaSource, MockRelay};
use paircall_client::{ClientConfig, ConnectivityEvent, SessionParts};
use paircall_core::RelayMessage;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Handles kept by the test after `SessionParts` is consumed: the capturing
/// doubles plus the senders used to inject inbound traffic.
pub struct TestHarness {
    pub conn: MockConnectivity,
    pub relay: MockRelay,
    pub sink: CollectSink,
    /// Injects messages as if the relay delivered them.
    pub relay_tx: mpsc::Sender<RelayMessage>,
    /// Injects events as if the connectivity backend fired them.
    pub conn_tx: mpsc::Sender<ConnectivityEvent>,
}

pub fn test_parts(config: ClientConfig) -> (SessionParts, TestHarness) {
    test_parts_with_media(config, MockMediaSource::new())
}

pub fn test_parts_with_media(
    config: ClientConfig,
    media: MockMediaSource,
) -> (SessionParts, TestHarness) {
    let conn = MockConnectivity::new();
    let (relay, _outbound_rx) = MockRelay::new();
    let sink = CollectSink::new();

    let (relay_tx, relay_rx) = mpsc::channel(16);
    let (conn_tx, connectivity_rx) = mpsc::channel(16);

    let parts = SessionParts {
        media: Arc::new(media),
        sink: Arc::new(sink.clone()),
        connectivity: Arc::new(conn.clone()),
        connectivity_rx,
        relay: Arc::new(relay.clone()),
        relay_rx,
        config,
    };

    let harness = TestHarness {
        conn,
        relay,
        sink,
        relay_tx,
        conn_tx,
    };

    (parts, harness)
}
