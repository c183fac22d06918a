mod rtc_link;

pub use rtc_link::RtcLink;

use anyhow::Result;
use async_trait::async_trait;
use paircall_core::{IceCandidate, RemoteTrack, SessionDescription, TrackHandle};

/// Coarse connection state surfaced to the caller. Mapped from the backend's
/// own state machine; `Connected` here means media-path connectivity, which
/// converges after description exchange completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    New,
    Connecting,
    Connected,
    Disconnected,
    Failed,
    Closed,
}

/// Events a connectivity backend pushes into the negotiation loop. The
/// channel carrying them is handed over at backend construction, before any
/// relay message is sent, so nothing fires into the void.
#[derive(Debug, Clone)]
pub enum ConnectivityEvent {
    /// A locally gathered candidate; `None` marks end of gathering and is
    /// never forwarded to the relay.
    CandidateGenerated(Option<IceCandidate>),
    /// An inbound media track arrived. Fires once per track, at any point.
    TrackReceived(RemoteTrack),
    StateChanged(LinkState),
}

/// The peer-connection primitive behind a seam. NAT-traversal mechanics are
/// its problem; the engine only pushes descriptions and candidates through
/// it. Ordering rules (single-shot descriptions, remote-before-candidates)
/// are enforced by the engine, not assumed of the backend.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn attach_track(&self, track: &TrackHandle) -> Result<()>;

    async fn create_offer(&self) -> Result<SessionDescription>;

    async fn create_answer(&self) -> Result<SessionDescription>;

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()>;

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()>;

    /// Applies a remote candidate. Duplicate applications must be tolerated;
    /// the relay gives no dedup guarantee.
    async fn add_candidate(&self, candidate: IceCandidate) -> Result<()>;

    async fn close(&self) -> Result<()>;
}
