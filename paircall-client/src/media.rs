use anyhow::Result;
use async_trait::async_trait;
use paircall_core::{RemoteTrack, TrackHandle};

/// Local tracks acquired for one session. Held for the session's lifetime;
/// dropping it returns the capture devices to their owner.
#[derive(Debug, Clone)]
pub struct LocalMedia {
    pub tracks: Vec<TrackHandle>,
}

impl LocalMedia {
    pub fn new(tracks: Vec<TrackHandle>) -> Self {
        Self { tracks }
    }
}

/// Capture collaborator. Acquisition happens once, at session start, before
/// any relay traffic; a failure here aborts session creation.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn acquire(&self) -> Result<LocalMedia>;
}

/// Render collaborator for inbound media. Called once per remote track,
/// independently of negotiation progress.
#[async_trait]
pub trait MediaSink: Send + Sync {
    async fn bind(&self, track: RemoteTrack);
}
