use webrtc::ice_transport::ice_candidate::RTCIceCandidate;

/// Timestamped logging
pub fn log(msg: &str) {
    if crate::config::LOGGING_ENABLED {
        let now = chrono::Local::now();
        println!("RUST: [{}] {}", now.format("%Y-%m-%d %H:%M:%S%.3f"), msg);
    }
}

/// Print an ICE candidate as it is discovered
pub async fn dump_candidate(label: &str, cand: &RTCIceCandidate) {
    if let Ok(init) = cand.to_json() {
        log(&format!(
            "{label} candidate: candidate={} sdp_mid={:?} sdp_mline_index={:?}",
            init.candidate, init.sdp_mid, init.sdp_mline_index
        ));
    }
}
