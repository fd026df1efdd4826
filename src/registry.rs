use crate::logger::log;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use webrtc::rtp_transceiver::rtp_codec::RTPCodecType;
use webrtc::track::track_remote::TrackRemote;

/// Per-index state the UI layer reads: the latest incoming video track and
/// a "connected" flag. One slot per remote source.
#[derive(Default)]
struct Slot {
    video: Option<Arc<TrackRemote>>,
    connected: bool,
}

/// Maps a session index to the resources the UI layer needs. Passed by
/// reference to every session; indices never share state.
#[derive(Default)]
pub struct SessionRegistry {
    slots: Mutex<HashMap<u32, Slot>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an incoming track for the given index. Video tracks are kept
    /// for the UI; audio tracks only flip the connected flag.
    pub fn record_incoming(&self, index: u32, track: Arc<TrackRemote>) {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots.entry(index).or_default();
        if track.kind() == RTPCodecType::Video {
            log(&format!("Registry: video track for index {}", index));
            slot.video = Some(track);
        } else {
            log(&format!(
                "Registry: {} track for index {} (not stored)",
                track.kind(),
                index
            ));
        }
        slot.connected = true;
    }

    pub fn mark_connected(&self, index: u32) {
        self.slots.lock().unwrap().entry(index).or_default().connected = true;
    }

    pub fn is_connected(&self, index: u32) -> bool {
        self.slots
            .lock()
            .unwrap()
            .get(&index)
            .map(|s| s.connected)
            .unwrap_or(false)
    }

    pub fn video_track(&self, index: u32) -> Option<Arc<TrackRemote>> {
        self.slots
            .lock()
            .unwrap()
            .get(&index)
            .and_then(|s| s.video.clone())
    }
}
