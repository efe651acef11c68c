//! Browser speech synthesis (`window.speechSynthesis`).

use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use super::{SpeechOutput, Utterance, VoiceInfo};

pub struct BrowserSynthesis {
    synth: SpeechSynthesis,
}

impl BrowserSynthesis {
    /// The page's synthesis engine, or `None` if the browser has none.
    pub fn new() -> Option<Self> {
        let synth = web_sys::window()?.speech_synthesis().ok()?;
        Some(Self { synth })
    }

    fn platform_voices(&self) -> Vec<SpeechSynthesisVoice> {
        self.synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl SpeechOutput for BrowserSynthesis {
    fn is_supported(&self) -> bool {
        true
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.platform_voices()
            .into_iter()
            .map(|v| VoiceInfo {
                name: v.name(),
                lang: v.lang(),
            })
            .collect()
    }

    fn speak(&self, utterance: &Utterance) {
        let utt = match SpeechSynthesisUtterance::new_with_text(&utterance.text) {
            Ok(utt) => utt,
            Err(e) => {
                leptos::logging::warn!("utterance construction failed: {e:?}");
                return;
            }
        };
        utt.set_rate(utterance.rate);
        utt.set_pitch(utterance.pitch);
        utt.set_volume(utterance.volume);
        if let Some(name) = utterance.voice.as_deref() {
            let voice = self.platform_voices().into_iter().find(|v| v.name() == name);
            utt.set_voice(voice.as_ref());
        }
        self.synth.speak(&utt);
    }

    fn cancel(&self) {
        self.synth.cancel();
    }

    fn pause(&self) {
        self.synth.pause();
    }

    fn resume(&self) {
        self.synth.resume();
    }
}
