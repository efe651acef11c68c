//! Aggregate page state mutated by the session controller.
//!
//! DESIGN
//! ======
//! The controller talks to state only through [`SessionStore`], so the same
//! pipeline drives a Leptos `RwSignal` in the browser and a plain
//! `Rc<RefCell<_>>` in tests. Closures passed to the store must not await;
//! the controller reads or writes between suspension points only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::chat::{Message, Transcript};
use super::history::HistoryState;
use super::settings::{Capability, SessionSettings, VoiceInputState};
use super::world::{AdventureContext, WorldState};
use crate::net::types::DEFAULT_RECENT_MOOD;

/// Everything the chat page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub transcript: Transcript,
    /// Current content of the message input.
    pub draft: String,
    /// A `/chat` request is in flight; the send control is disabled.
    pub loading: bool,
    /// Last companion reply, replayed by the speak button.
    pub last_response: Option<String>,
    /// Emotion shown by the mood indicator.
    pub mood: String,
    pub world: Option<WorldState>,
    pub adventure_context: Option<AdventureContext>,
    pub history: HistoryState,
    pub settings: SessionSettings,
    pub voice: VoiceInputState,
    pub speech_input: Capability,
    pub speech_output: Capability,
    /// Bumped after every transcript append; the view scrolls on change.
    pub scroll_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            transcript: Transcript::default(),
            draft: String::new(),
            loading: false,
            last_response: None,
            mood: DEFAULT_RECENT_MOOD.to_owned(),
            world: None,
            adventure_context: None,
            history: HistoryState::default(),
            settings: SessionSettings::default(),
            voice: VoiceInputState::Idle,
            speech_input: Capability::Available,
            speech_output: Capability::Available,
            scroll_seq: 0,
        }
    }
}

impl SessionState {
    /// Append a transcript entry and fire the scroll hook.
    pub fn append(&mut self, message: Message) {
        self.transcript.push(message);
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }

    pub fn is_listening(&self) -> bool {
        self.voice == VoiceInputState::Listening
    }

    pub fn adventure_panel_visible(&self) -> bool {
        self.settings.adventure_mode
    }

    /// The send control accepts input.
    pub fn can_send(&self) -> bool {
        !self.loading && !self.draft.trim().is_empty()
    }
}

/// Shared handle to [`SessionState`].
pub trait SessionStore: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionStore for RwSignal<SessionState> {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut());
    }
}
