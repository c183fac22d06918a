use anyhow::{Result, bail};
use async_trait::async_trait;
use paircall_client::{LocalMedia, MediaSink, MediaSource};
use paircall_core::{RemoteTrack, TrackHandle, TrackKind};
use std::sync::{Arc, Mutex};

/// MediaSource double: one audio plus one video track, or a permission-style
/// failure when built with `failing()`.
#[derive(Clone)]
pub struct MockMediaSource {
    fail: bool,
}

impl MockMediaSource {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl MediaSource for MockMediaSource {
    async fn acquire(&self) -> Result<LocalMedia> {
        if self.fail {
            bail!("media permission denied");
        }
        Ok(LocalMedia::new(vec![
            TrackHandle::new(TrackKind::Audio),
            TrackHandle::new(TrackKind::Video),
        ]))
    }
}

/// MediaSink double collecting every bound remote track.
#[derive(Clone, Default)]
pub struct CollectSink {
    tracks: Arc<Mutex<Vec<RemoteTrack>>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound_tracks(&self) -> Vec<RemoteTrack> {
        self.tracks.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaSink for CollectSink {
    async fn bind(&self, track: RemoteTrack) {
        self.tracks.lock().unwrap().push(track);
    }
}
