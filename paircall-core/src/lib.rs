pub mod model;

pub use model::{
    IceCandidate, IceServerConfig, RelayMessage, RemoteTrack, Role, RoomId, SdpKind,
    SessionDescription, TrackHandle, TrackKind,
};
