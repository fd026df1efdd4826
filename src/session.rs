use crate::error::NegotiateError;
use crate::peer::connection;
use crate::registry::SessionRegistry;
use std::sync::Arc;
use webrtc::peer_connection::RTCPeerConnection;

/// One peer-connection instance bound to a remote slot. Lives for the whole
/// process; there is no teardown path.
pub struct Session {
    index: u32,
    pc: Arc<RTCPeerConnection>,
}

impl Session {
    /// Build the peer for `index` and wire its incoming tracks into the
    /// registry. No descriptions are committed yet.
    pub async fn new(index: u32, registry: Arc<SessionRegistry>) -> Result<Self, NegotiateError> {
        let pc = connection::new_peer(index, registry).await?;
        Ok(Self { index, pc })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub(crate) fn peer(&self) -> &RTCPeerConnection {
        &self.pc
    }

    /// Whether a remote description has been committed for this session.
    pub async fn remote_committed(&self) -> bool {
        self.pc.remote_description().await.is_some()
    }
}
