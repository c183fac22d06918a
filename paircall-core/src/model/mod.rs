mod candidate;
mod role;
mod room;
mod sdp;
mod signaling;
mod track;

pub use candidate::IceCandidate;
pub use role::Role;
pub use room::RoomId;
pub use sdp::{SdpKind, SessionDescription};
pub use signaling::{IceServerConfig, RelayMessage};
pub use track::{RemoteTrack, TrackHandle, TrackKind};
