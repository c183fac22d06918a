use crate::model::candidate::IceCandidate;
use crate::model::room::RoomId;
use crate::model::sdp::SessionDescription;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

impl IceServerConfig {
    pub fn stun(url: impl Into<String>) -> Self {
        Self {
            urls: vec![url.into()],
            username: None,
            credential: None,
        }
    }
}

/// Every message the signaling relay carries, scoped by room. `create` and
/// `join` announce membership to the relay; `offer`, `answer` and
/// `candidate` are forwarded verbatim to the other endpoint in the room.
///
/// A `candidate` with a null payload mirrors end-of-gathering signaling and
/// carries no data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RelayMessage {
    Create {
        #[serde(rename = "roomId")]
        room: RoomId,
    },
    Join {
        #[serde(rename = "roomId")]
        room: RoomId,
    },
    Offer {
        #[serde(rename = "roomId")]
        room: RoomId,
        offer: SessionDescription,
    },
    Answer {
        #[serde(rename = "roomId")]
        room: RoomId,
        answer: SessionDescription,
    },
    Candidate {
        #[serde(rename = "roomId")]
        room: RoomId,
        #[serde(default)]
        candidate: Option<IceCandidate>,
    },
}

impl RelayMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            RelayMessage::Create { .. } => "create",
            RelayMessage::Join { .. } => "join",
            RelayMessage::Offer { .. } => "offer",
            RelayMessage::Answer { .. } => "answer",
            RelayMessage::Candidate { .. } => "candidate",
        }
    }

    pub fn room(&self) -> &RoomId {
        match self {
            RelayMessage::Create { room }
            | RelayMessage::Join { room }
            | RelayMessage::Offer { room, .. }
            | RelayMessage::Answer { room, .. }
            | RelayMessage::Candidate { room, .. } => room,
        }
    }
}
