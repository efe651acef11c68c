//! Voice input lifecycle: `Idle -> Listening -> Idle`.
//!
//! User gestures call `start_listening` / `stop_listening`; the recognition
//! engine reports back through the `on_recognition_*` methods. The engine
//! itself enforces a single active session.

use super::ChatSession;
use crate::net::api::CompanionApi;
use crate::platform::Cue;
use crate::state::session::SessionStore;
use crate::state::settings::{Capability, VoiceInputState};

pub const RECOGNITION_UNSUPPORTED: &str = "Speech recognition not supported in this browser";
pub const RECOGNITION_UNAVAILABLE: &str = "Voice recognition not available in this browser";
pub const SYNTHESIS_UNSUPPORTED: &str = "Speech synthesis not supported in this browser";
pub const MICROPHONE_DENIED: &str = "Microphone access denied";
const START_FAILED: &str = "Failed to start voice recognition";

/// Engine error codes meaning the user or browser refused microphone access.
const DENIED_CODES: [&str; 2] = ["not-allowed", "service-not-allowed"];

impl<S: SessionStore, A: CompanionApi> ChatSession<S, A> {
    /// Mic button: start when idle, stop when listening.
    pub fn toggle_listening(&self) {
        if self.store.read(|s| s.is_listening()) {
            self.stop_listening();
        } else {
            self.start_listening();
        }
    }

    pub fn start_listening(&self) {
        let (available, listening) = self.store.read(|s| (s.speech_input.is_available(), s.is_listening()));
        if !available {
            self.show_error(RECOGNITION_UNAVAILABLE);
            return;
        }
        if listening {
            return;
        }
        if let Err(e) = self.platform.speech_input.start() {
            leptos::logging::warn!("speech recognition start failed: {e}");
            self.show_error(START_FAILED);
        }
    }

    pub fn stop_listening(&self) {
        self.platform.speech_input.stop();
        self.store.write(|s| s.voice = VoiceInputState::Idle);
    }

    /// Engine started capturing audio.
    pub fn on_recognition_start(&self) {
        self.store.write(|s| s.voice = VoiceInputState::Listening);
        self.cue(Cue::Start);
    }

    /// Engine produced a final transcript: fill the input and send it.
    pub async fn on_recognition_result(&self, transcript: String) {
        leptos::logging::log!("voice transcript: {transcript}");
        self.store.write(|s| {
            s.voice = VoiceInputState::Idle;
            s.draft = transcript;
        });
        self.cue(Cue::Success);
        self.send_draft().await;
    }

    /// Engine reported an error code mid-session.
    pub fn on_recognition_error(&self, code: &str) {
        leptos::logging::warn!("speech recognition error: {code}");
        let denied = DENIED_CODES.contains(&code);
        self.store.write(|s| {
            s.voice = VoiceInputState::Idle;
            if denied {
                s.speech_input = Capability::Unavailable(MICROPHONE_DENIED.to_owned());
            }
        });
        self.show_error(format!("Voice recognition failed: {code}"));
        self.cue(Cue::Error);
    }

    /// Engine stopped without (further) results, e.g. after silence.
    pub fn on_recognition_end(&self) {
        self.store.write(|s| s.voice = VoiceInputState::Idle);
    }
}
