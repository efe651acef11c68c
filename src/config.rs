//! Client configuration.
//!
//! The page has no environment to read from; configuration is a plain value
//! built at startup and handed to the session controller.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Recognition language used when none is configured.
pub const DEFAULT_RECOGNITION_LANG: &str = "en-US";

/// Greeting shown as the first transcript entry.
pub const DEFAULT_GREETING: &str =
    "Hi there! I'm your AI companion. Tell me how your day is going, or switch on adventure mode to explore a world together.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined onto endpoint paths; empty means same origin.
    pub api_base: String,
    /// BCP 47 tag for speech recognition; its primary subtag also steers
    /// voice selection for speech output.
    pub recognition_lang: String,
    /// Optional opening message from the companion.
    pub greeting: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            recognition_lang: DEFAULT_RECOGNITION_LANG.to_owned(),
            greeting: Some(DEFAULT_GREETING.to_owned()),
        }
    }
}

impl ClientConfig {
    /// Primary language subtag (`en-US` -> `en`), lowercased.
    pub fn language_prefix(&self) -> String {
        self.recognition_lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}
