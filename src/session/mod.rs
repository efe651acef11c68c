//! Chat session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatSession` is the one place that turns user gestures and engine events
//! into requests, state changes, speech and cues. Views call its methods and
//! render `SessionState`; they never talk to the backend or the speech
//! engines directly.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the page's single event loop. The only suspension
//! points are the endpoint calls. Overlapping sends are prevented by the
//! `loading` flag, which is checked and set in the same store write that
//! appends the user's message, before the request is issued.

#[path = "speech.rs"]
mod speech;
#[path = "voice.rs"]
mod voice;

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;




use std::rc::Rc;

pub use speech::pick_voice;
pub use voice::{MICROPHONE_DENIED, RECOGNITION_UNAVAILABLE, RECOGNITION_UNSUPPORTED, SYNTHESIS_UNSUPPORTED};

use crate::config::ClientConfig;
use crate::net::api::CompanionApi;
use crate::net::types::{AdventureRequest, ChatRequest, CompanionReply, MemorySnapshot};
use crate::platform::{Cue, Platform};
use crate::state::chat::{Message, Sender};
use crate::state::session::SessionStore;
use crate::state::settings::Capability;
use crate::state::world::WorldState;
use crate::util::time::now_ms;

pub const SEND_FAILED: &str = "Failed to send message. Please try again.";
pub const ADVENTURE_ON: &str = "🏰 Adventure mode activated! You find yourself in a mystical world. Type 'look' to examine your surroundings or 'help' for commands.";
pub const ADVENTURE_OFF: &str = "💬 Returning to companion mode. I'm here to chat and listen!";
pub const HISTORY_CLEARED: &str = "History cleared! Let's start fresh. How can I help you today?";
pub const SUGGEST_ACTIVITY_PROMPT: &str = "Can you suggest something fun we could do together?";
pub const DEFAULT_DICE: &str = "1d20";

/// Memories summarized by [`ChatSession::recall_memory`].
const RECALL_LIMIT: usize = 5;

/// What a call to [`ChatSession::send_message`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input or a request already in flight; nothing happened.
    Skipped,
    /// The companion replied.
    Delivered,
    /// The request failed and an error bubble was shown.
    Failed,
}

/// The session controller.
pub struct ChatSession<S, A> {
    store: S,
    api: Rc<A>,
    platform: Platform,
    config: Rc<ClientConfig>,
}

impl<S: Clone, A> Clone for ChatSession<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: Rc::clone(&self.api),
            platform: self.platform.clone(),
            config: Rc::clone(&self.config),
        }
    }
}

impl<S: SessionStore, A: CompanionApi> ChatSession<S, A> {
    /// Build the controller and record which speech capabilities exist.
    pub fn new(store: S, api: Rc<A>, platform: Platform, config: ClientConfig) -> Self {
        let input_supported = platform.speech_input.is_supported();
        let output_supported = platform.speech_output.is_supported();
        let greeting = config.greeting.clone();
        store.write(|s| {
            if !input_supported {
                s.speech_input = Capability::Unavailable(RECOGNITION_UNSUPPORTED.to_owned());
            }
            if !output_supported {
                s.speech_output = Capability::Unavailable(SYNTHESIS_UNSUPPORTED.to_owned());
            }
            if let Some(text) = greeting {
                s.append(Message::new(Sender::Ai, text, None, now_ms()));
            }
        });
        if !input_supported {
            leptos::logging::warn!("speech recognition not supported");
        }
        Self {
            store,
            api,
            platform,
            config: Rc::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Initial page load: history, companion status and, in adventure
    /// mode, the world panel.
    pub async fn load_initial(&self) {
        if let Some(snapshot) = self.fetch_memory().await {
            self.store.write(|s| {
                s.mood.clone_from(&snapshot.recent_mood);
                s.history.apply(snapshot);
            });
        }
        self.refresh_world().await;
    }

    // =========================================================================
    // SEND PIPELINE
    // =========================================================================

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.store.write(|s| s.draft = text);
    }

    /// Send whatever is in the input field.
    pub async fn send_draft(&self) -> SendOutcome {
        let text = self.store.read(|s| s.draft.clone());
        self.send_message(&text).await
    }

    /// Send `text` to the companion and render the outcome.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let message = text.trim().to_owned();
        if message.is_empty() {
            return SendOutcome::Skipped;
        }

        let mut busy = false;
        let mut adventure_mode = false;
        self.store.write(|s| {
            if s.loading {
                busy = true;
                return;
            }
            adventure_mode = s.settings.adventure_mode;
            s.append(Message::new(Sender::User, message.clone(), None, now_ms()));
            s.draft.clear();
            s.loading = true;
        });
        if busy {
            leptos::logging::log!("send ignored: request already in flight");
            return SendOutcome::Skipped;
        }

        let request = ChatRequest {
            message,
            adventure_mode,
        };
        match self.api.chat(&request).await {
            Ok(raw) => {
                self.deliver_reply(CompanionReply::from(raw)).await;
                SendOutcome::Delivered
            }
            Err(e) => {
                leptos::logging::warn!("chat request failed: {e}");
                self.store.write(|s| {
                    s.append(Message::new(Sender::Error, SEND_FAILED, None, now_ms()));
                    s.loading = false;
                });
                self.cue(Cue::Error);
                SendOutcome::Failed
            }
        }
    }

    async fn deliver_reply(&self, reply: CompanionReply) {
        let CompanionReply {
            text,
            mood,
            message_emotion,
            world,
            context,
            relationship_depth,
        } = reply;
        let world_in_reply = world.is_some();

        let mut auto_speak = false;
        let mut adventure_mode = false;
        self.store.write(|s| {
            s.append(Message::new(Sender::Ai, text.clone(), message_emotion, now_ms()));
            s.last_response = Some(text.clone());
            if let Some(mood) = mood {
                s.mood = mood;
            }
            if let Some(world) = world {
                s.world = Some(world);
            }
            if let Some(context) = context {
                s.adventure_context = Some(context);
            }
            if let Some(depth) = relationship_depth {
                s.history.relationship_depth = depth;
            }
            s.loading = false;
            auto_speak = s.settings.auto_speak;
            adventure_mode = s.settings.adventure_mode;
        });

        if auto_speak {
            self.speak(&text);
        }
        self.cue(Cue::Message);

        self.refresh_history().await;
        // The reply's depth is newer than the `/memory` snapshot.
        if let Some(depth) = relationship_depth {
            self.store.write(|s| s.history.relationship_depth = depth);
        }
        if adventure_mode && !world_in_reply {
            self.refresh_world().await;
        }
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    async fn fetch_memory(&self) -> Option<MemorySnapshot> {
        match self.api.memory().await {
            Ok(raw) => Some(MemorySnapshot::from(raw)),
            Err(e) => {
                leptos::logging::warn!("memory request failed: {e}");
                None
            }
        }
    }

    /// Re-fetch `/memory` into the history panel.
    pub async fn refresh_history(&self) {
        if let Some(snapshot) = self.fetch_memory().await {
            self.store.write(|s| s.history.apply(snapshot));
        }
    }

    /// Open the detail view for the `index`-th visible history row.
    pub fn select_history(&self, index: usize) {
        self.store.write(|s| {
            s.history.select_recent(index);
        });
    }

    pub fn close_history_detail(&self) {
        self.store.write(|s| s.history.close_detail());
    }

    /// Clear the history panel. View-only: the backend log is untouched and
    /// the next refresh repopulates the panel.
    pub fn clear_history(&self) {
        self.store.write(|s| {
            s.history.clear_view();
            s.append(Message::new(Sender::System, HISTORY_CLEARED, None, now_ms()));
        });
    }

    // =========================================================================
    // ADVENTURE MODE
    // =========================================================================

    /// Turn adventure mode on or off. Repeating the current mode is a no-op.
    pub async fn set_adventure_mode(&self, enabled: bool) {
        let mut changed = false;
        self.store.write(|s| {
            if s.settings.adventure_mode == enabled {
                return;
            }
            s.settings.adventure_mode = enabled;
            let notice = if enabled { ADVENTURE_ON } else { ADVENTURE_OFF };
            s.append(Message::new(Sender::System, notice, None, now_ms()));
            changed = true;
        });
        if changed && enabled {
            self.refresh_world().await;
        }
    }

    /// Replace the world panel from `/world`. Does nothing outside adventure mode.
    pub async fn refresh_world(&self) {
        if !self.store.read(|s| s.settings.adventure_mode) {
            return;
        }
        match self.api.world().await {
            Ok(raw) => {
                let world = WorldState::from(raw);
                self.store.write(|s| s.world = Some(world));
            }
            Err(e) => leptos::logging::warn!("world request failed: {e}"),
        }
    }

    // =========================================================================
    // QUICK ACTIONS
    // =========================================================================

    /// Ask the companion for an activity idea.
    pub async fn suggest_activity(&self) -> SendOutcome {
        self.set_draft(SUGGEST_ACTIVITY_PROMPT);
        self.send_draft().await
    }

    /// Ask the backend to roll dice and post the result.
    pub async fn roll_dice(&self, notation: &str) {
        match self.api.adventure(&AdventureRequest::roll_dice(notation)).await {
            Ok(resp) => {
                if let Some(result) = resp.dice_result {
                    let text = format!("🎲 {}", result.description);
                    self.store.write(|s| {
                        s.append(Message::new(Sender::Ai, text, Some("excited".to_owned()), now_ms()));
                    });
                }
            }
            Err(e) => leptos::logging::warn!("dice roll failed: {e}"),
        }
    }

    /// Post a companion message summarizing what it remembers.
    pub async fn recall_memory(&self) {
        let Some(snapshot) = self.fetch_memory().await else {
            return;
        };
        let total = snapshot.conversations.len();
        let text = format!(
            "I remember our last {} conversations. We've talked {total} times total, and our relationship depth is {}.",
            total.min(RECALL_LIMIT),
            snapshot.relationship_depth
        );
        self.store.write(|s| {
            s.append(Message::new(Sender::Ai, text, Some("nostalgic".to_owned()), now_ms()));
        });
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    pub fn set_auto_speak(&self, enabled: bool) {
        self.store.write(|s| s.settings.auto_speak = enabled);
    }

    pub fn set_sound_effects(&self, enabled: bool) {
        self.store.write(|s| s.settings.sound_effects = enabled);
    }

    pub fn set_voice_rate(&self, rate: f32) {
        self.store.write(|s| s.settings.set_voice_rate(rate));
    }

    /// Apply the raw value of the speed slider; unparseable input is ignored.
    pub fn set_voice_rate_from_input(&self, raw: &str) {
        self.store.write(|s| s.settings.set_voice_rate_from_input(raw));
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn show_error(&self, text: impl Into<String>) {
        let text = text.into();
        self.store.write(|s| s.append(Message::new(Sender::Error, text, None, now_ms())));
    }

    /// Play `cue` if sound effects are on.
    fn cue(&self, cue: Cue) {
        if self.store.read(|s| s.settings.sound_effects) {
            self.platform.cues.play(cue);
        }
    }
}
