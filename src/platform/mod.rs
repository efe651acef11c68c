//! Platform speech and audio capabilities behind injectable traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser owns one speech-recognition engine, one speech-synthesis
//! engine and the audio output used for cues. The session controller only
//! sees the traits below; browser builds plug in the `web-sys` backed
//! implementations while SSR and tests use the silent ones or mocks.
//!
//! TRADE-OFFS
//! ==========
//! Recognition events (start/result/error/end) are pushed into the
//! controller by the browser implementation rather than polled, so the
//! `SpeechInput` trait only exposes the user-driven half of the lifecycle.

pub mod cues;
#[cfg(feature = "hydrate")]
pub mod recognition;
#[cfg(feature = "hydrate")]
pub mod synthesis;

use std::rc::Rc;

pub use cues::Cue;

/// A voice offered by the synthesis engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP 47 tag such as `en-US`.
    pub lang: String,
}

/// One utterance handed to the synthesis engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Name of the chosen voice; `None` keeps the platform default.
    pub voice: Option<String>,
}

/// Speech-to-text engine.
pub trait SpeechInput {
    fn is_supported(&self) -> bool;
    /// Begin a recognition session.
    ///
    /// # Errors
    ///
    /// Returns the engine's description when it refuses to start, e.g. a
    /// session is already active.
    fn start(&self) -> Result<(), String>;
    fn stop(&self);
}

/// Text-to-speech engine. A single utterance is audible at a time.
pub trait SpeechOutput {
    fn is_supported(&self) -> bool;
    fn voices(&self) -> Vec<VoiceInfo>;
    fn speak(&self, utterance: &Utterance);
    fn cancel(&self);
    fn pause(&self);
    fn resume(&self);
}

/// Short audible tones signalling session events.
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

/// Capability bundle injected into the session controller.
#[derive(Clone)]
pub struct Platform {
    pub speech_input: Rc<dyn SpeechInput>,
    pub speech_output: Rc<dyn SpeechOutput>,
    pub cues: Rc<dyn CuePlayer>,
}

impl Platform {
    /// A platform with no speech and silent cues (SSR, unsupported browsers).
    pub fn unsupported() -> Self {
        Self {
            speech_input: Rc::new(NoSpeechInput),
            speech_output: Rc::new(NoSpeechOutput),
            cues: Rc::new(SilentCues),
        }
    }
}

/// Speech input for platforms without recognition.
pub struct NoSpeechInput;

impl SpeechInput for NoSpeechInput {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self) -> Result<(), String> {
        Err("speech recognition unavailable".to_owned())
    }

    fn stop(&self) {}
}

/// Speech output for platforms without synthesis.
pub struct NoSpeechOutput;

impl SpeechOutput for NoSpeechOutput {
    fn is_supported(&self) -> bool {
        false
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn speak(&self, _utterance: &Utterance) {}

    fn cancel(&self) {}

    fn pause(&self) {}

    fn resume(&self) {}
}

/// Cue player that never makes a sound.
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&self, _cue: Cue) {}
}
