//! Page-lifetime toggles and voice capability state.
//!
//! Settings are never persisted; they live exactly as long as the page.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const VOICE_RATE_MIN: f32 = 0.5;
pub const VOICE_RATE_MAX: f32 = 2.0;
pub const VOICE_RATE_STEP: f32 = 0.1;
pub const VOICE_RATE_DEFAULT: f32 = 1.0;

/// User-adjustable session toggles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSettings {
    pub auto_speak: bool,
    pub sound_effects: bool,
    voice_rate: f32,
    pub adventure_mode: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            auto_speak: false,
            sound_effects: true,
            voice_rate: VOICE_RATE_DEFAULT,
            adventure_mode: false,
        }
    }
}

impl SessionSettings {
    pub fn voice_rate(&self) -> f32 {
        self.voice_rate
    }

    /// Set the speech rate, clamped to the slider range. Non-finite input
    /// resets to the default.
    pub fn set_voice_rate(&mut self, rate: f32) {
        self.voice_rate = if rate.is_finite() {
            rate.clamp(VOICE_RATE_MIN, VOICE_RATE_MAX)
        } else {
            VOICE_RATE_DEFAULT
        };
    }

    /// Parse the raw value of the range input.
    pub fn set_voice_rate_from_input(&mut self, raw: &str) {
        if let Ok(rate) = raw.trim().parse::<f32>() {
            self.set_voice_rate(rate);
        }
    }
}

/// Speech recognition lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoiceInputState {
    #[default]
    Idle,
    Listening,
}

/// Availability of a platform speech capability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    #[default]
    Available,
    /// Disabled for the rest of the session; carries the control's label.
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Explanatory label for a disabled control.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}
