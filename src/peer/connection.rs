use crate::logger::{dump_candidate, log};
use crate::registry::SessionRegistry;
use std::sync::Arc;
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::MediaEngine;
use webrtc::api::APIBuilder;
use webrtc::ice_transport::ice_candidate::RTCIceCandidate;
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::interceptor::registry::Registry;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::rtp_transceiver::rtp_codec::RTPCodecType;
use webrtc::rtp_transceiver::rtp_transceiver_direction::RTCRtpTransceiverDirection;
use webrtc::rtp_transceiver::RTCRtpTransceiverInit;

/// Default peer connection configuration
fn rtc_config() -> RTCConfiguration {
    RTCConfiguration {
        ice_servers: vec![RTCIceServer {
            urls: vec![
                "stun:stun.l.google.com:19302".into(),
                "stun:stun1.l.google.com:19302".into(),
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// webrtc API with the default codec set and default interceptors, so the
/// offer can carry audio/video m-lines.
pub fn build_api() -> Result<webrtc::api::API, webrtc::Error> {
    let mut media_engine = MediaEngine::default();
    media_engine.register_default_codecs()?;
    let registry = register_default_interceptors(Registry::new(), &mut media_engine)?;
    Ok(APIBuilder::new()
        .with_media_engine(media_engine)
        .with_interceptor_registry(registry)
        .build())
}

/// Create the peer for one session slot and route its incoming tracks into
/// the registry under `index`.
pub async fn new_peer(
    index: u32,
    registry: Arc<SessionRegistry>,
) -> Result<Arc<RTCPeerConnection>, webrtc::Error> {
    let api = build_api()?;
    let pc = Arc::new(api.new_peer_connection(rtc_config()).await?);

    pc.on_ice_candidate(Box::new(move |cand: Option<RTCIceCandidate>| {
        Box::pin(async move {
            match cand {
                Some(c) => dump_candidate("LOCAL", &c).await,
                None => log("ICE candidate gathering completed (null candidate received)"),
            }
        })
    }));

    pc.on_peer_connection_state_change(Box::new(move |st: RTCPeerConnectionState| {
        log(&format!(
            "Peer connection {} state changed to: {:?}",
            index, st
        ));
        Box::pin(async {})
    }));

    pc.on_track(Box::new(move |track, _receiver, _transceiver| {
        let registry = registry.clone();
        log(&format!(
            "Incoming {} track for index {} (ssrc={})",
            track.kind(),
            index,
            track.ssrc()
        ));
        Box::pin(async move {
            registry.record_incoming(index, track);
        })
    }));

    Ok(pc)
}

/// Declare the media we want to receive. Must run before the offer is built
/// so the generated description advertises both m-lines as recvonly.
pub async fn add_recv_transceivers(pc: &RTCPeerConnection) -> Result<(), webrtc::Error> {
    for kind in [RTPCodecType::Video, RTPCodecType::Audio] {
        let init = RTCRtpTransceiverInit {
            direction: RTCRtpTransceiverDirection::Recvonly,
            send_encodings: vec![],
        };
        pc.add_transceiver_from_kind(kind, Some(init)).await?;
    }
    Ok(())
}
