use anyhow::Result;
use async_trait::async_trait;
use paircall_client::Connectivity;
use paircall_core::{IceCandidate, SessionDescription, TrackHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Connectivity double that records every call and hands out canned SDP.
#[derive(Clone, Default)]
pub struct MockConnectivity {
    attached: Arc<Mutex<Vec<TrackHandle>>>,
    local_descriptions: Arc<Mutex<Vec<SessionDescription>>>,
    remote_descriptions: Arc<Mutex<Vec<SessionDescription>>>,
    candidates: Arc<Mutex<Vec<IceCandidate>>>,
    closed: Arc<AtomicBool>,
}

impl MockConnectivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_tracks(&self) -> Vec<TrackHandle> {
        self.attached.lock().unwrap().clone()
    }

    pub fn local_descriptions(&self) -> Vec<SessionDescription> {
        self.local_descriptions.lock().unwrap().clone()
    }

    pub fn remote_descriptions(&self) -> Vec<SessionDescription> {
        self.remote_descriptions.lock().unwrap().clone()
    }

    pub fn applied_candidates(&self) -> Vec<IceCandidate> {
        self.candidates.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Connectivity for MockConnectivity {
    async fn attach_track(&self, track: &TrackHandle) -> Result<()> {
        self.attached.lock().unwrap().push(track.clone());
        Ok(())
    }

    async fn create_offer(&self) -> Result<SessionDescription> {
        Ok(SessionDescription::offer("v=0\r\ns=mock-offer"))
    }

    async fn create_answer(&self) -> Result<SessionDescription> {
        Ok(SessionDescription::answer("v=0\r\ns=mock-answer"))
    }

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()> {
        self.local_descriptions.lock().unwrap().push(desc);
        Ok(())
    }

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()> {
        self.remote_descriptions.lock().unwrap().push(desc);
        Ok(())
    }

    async fn add_candidate(&self, candidate: IceCandidate) -> Result<()> {
        self.candidates.lock().unwrap().push(candidate);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::Relaxed);
        Ok(())
    }
}
