use paircall_core::IceServerConfig;
use std::time::Duration;

/// Session-wide configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket endpoint of the signaling relay.
    pub relay_endpoint: String,
    /// STUN/TURN servers handed to the connectivity backend.
    pub ice_servers: Vec<IceServerConfig>,
    /// Deadline for reaching the connected negotiation phase. `None` lets a
    /// silent peer leave the session pending indefinitely.
    pub negotiation_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: "ws://127.0.0.1:3000/signal".to_string(),
            ice_servers: vec![IceServerConfig::stun("stun:stun.l.google.com:19302")],
            negotiation_timeout: None,
        }
    }
}
