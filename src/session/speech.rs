//! Speech output: one utterance at a time, last request wins.

use super::ChatSession;
use crate::net::api::CompanionApi;
use crate::platform::{Utterance, VoiceInfo};
use crate::state::session::SessionStore;

/// Name fragments that mark a higher quality voice.
const QUALITY_MARKERS: [&str; 2] = ["Natural", "Enhanced"];

/// Choose a voice: a quality voice first, then one matching `lang_prefix`,
/// else `None` for the platform default.
pub fn pick_voice<'a>(voices: &'a [VoiceInfo], lang_prefix: &str) -> Option<&'a VoiceInfo> {
    voices
        .iter()
        .find(|v| QUALITY_MARKERS.iter().any(|marker| v.name.contains(marker)))
        .or_else(|| {
            if lang_prefix.is_empty() {
                return None;
            }
            voices
                .iter()
                .find(|v| v.lang.to_ascii_lowercase().starts_with(lang_prefix))
        })
}

impl<S: SessionStore, A: CompanionApi> ChatSession<S, A> {
    /// Speak `text`, cancelling whatever is currently being spoken.
    ///
    /// The rate is read from settings now; later slider changes do not
    /// affect this utterance.
    pub fn speak(&self, text: &str) {
        let output = &self.platform.speech_output;
        if !output.is_supported() || text.trim().is_empty() {
            return;
        }
        output.cancel();

        let rate = self.store.read(|s| s.settings.voice_rate());
        let voices = output.voices();
        let voice = pick_voice(&voices, &self.config.language_prefix()).map(|v| v.name.clone());
        output.speak(&Utterance {
            text: text.to_owned(),
            rate,
            pitch: 1.0,
            volume: 1.0,
            voice,
        });
    }

    /// Replay the most recent companion reply.
    pub fn speak_last_response(&self) {
        if let Some(text) = self.store.read(|s| s.last_response.clone()) {
            self.speak(&text);
        }
    }

    /// Pause speech while the page is hidden and resume when it returns.
    pub fn visibility_changed(&self, hidden: bool) {
        let output = &self.platform.speech_output;
        if !output.is_supported() {
            return;
        }
        if hidden {
            output.pause();
        } else {
            output.resume();
        }
    }
}
