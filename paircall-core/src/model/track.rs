use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}

/// Handle to a locally captured media track. Capture lives outside this
/// crate; the handle is only forwarded into the connectivity object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackHandle {
    pub id: Uuid,
    pub kind: TrackKind,
}

impl TrackHandle {
    pub fn new(kind: TrackKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }
}

/// Inbound media track surfaced by the connectivity object, handed to the
/// remote-render collaborator as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTrack {
    pub id: String,
    pub kind: TrackKind,
}
