//! Audible cues and their tone shapes.
//!
//! Browser playback synthesizes each cue with a short oscillator sweep on a
//! shared `AudioContext`. Audio failures are logged and ignored.

#[cfg(test)]
#[path = "cues_test.rs"]
mod cues_test;

/// Session events that have an audible cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Listening started.
    Start,
    /// Speech was recognized.
    Success,
    /// A request or recognition failed.
    Error,
    /// A companion reply arrived.
    Message,
}

/// Oscillator sweep for one cue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    /// Frequency reached after `ramp_secs`; `None` holds `start_hz`.
    pub end_hz: Option<f32>,
    pub ramp_secs: f64,
    pub duration_secs: f64,
    pub gain: f32,
    /// Gain reached at the end of the cue.
    pub gain_floor: f32,
}

const CUE_DURATION_SECS: f64 = 0.2;
const CUE_GAIN: f32 = 0.1;
const CUE_GAIN_FLOOR: f32 = 0.01;

impl Cue {
    pub fn tone(self) -> Tone {
        let (start_hz, end_hz, ramp_secs) = match self {
            Self::Start => (440.0, Some(880.0), 0.1),
            Self::Success => (523.0, Some(659.0), 0.1),
            Self::Error => (200.0, Some(100.0), 0.2),
            Self::Message => (600.0, None, 0.0),
        };
        Tone {
            start_hz,
            end_hz,
            ramp_secs,
            duration_secs: CUE_DURATION_SECS,
            gain: CUE_GAIN,
            gain_floor: CUE_GAIN_FLOOR,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ToneCuePlayer;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, OscillatorType};

    use super::{Cue, Tone};
    use crate::platform::CuePlayer;

    /// Plays cues through a lazily created, reused `AudioContext`.
    #[derive(Default)]
    pub struct ToneCuePlayer {
        context: RefCell<Option<AudioContext>>,
    }

    impl ToneCuePlayer {
        pub fn new() -> Self {
            Self::default()
        }

        fn context(&self) -> Result<AudioContext, JsValue> {
            let mut slot = self.context.borrow_mut();
            if let Some(ctx) = slot.as_ref() {
                return Ok(ctx.clone());
            }
            let ctx = AudioContext::new()?;
            *slot = Some(ctx.clone());
            Ok(ctx)
        }

        fn try_play(&self, tone: Tone) -> Result<(), JsValue> {
            let ctx = self.context()?;
            let oscillator = ctx.create_oscillator()?;
            let gain = ctx.create_gain()?;
            oscillator.connect_with_audio_node(&gain)?;
            gain.connect_with_audio_node(&ctx.destination())?;
            oscillator.set_type(OscillatorType::Sine);

            let now = ctx.current_time();
            let frequency = oscillator.frequency();
            frequency.set_value_at_time(tone.start_hz, now)?;
            if let Some(end_hz) = tone.end_hz {
                frequency.exponential_ramp_to_value_at_time(end_hz, now + tone.ramp_secs)?;
            }
            let volume = gain.gain();
            volume.set_value_at_time(tone.gain, now)?;
            volume.exponential_ramp_to_value_at_time(tone.gain_floor, now + tone.duration_secs)?;

            oscillator.start_with_when(now)?;
            oscillator.stop_with_when(now + tone.duration_secs)?;
            Ok(())
        }
    }

    impl CuePlayer for ToneCuePlayer {
        fn play(&self, cue: Cue) {
            if let Err(e) = self.try_play(cue.tone()) {
                leptos::logging::warn!("cue {cue:?} playback failed: {e:?}");
            }
        }
    }
}
