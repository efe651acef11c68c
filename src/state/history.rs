//! Conversation history panel and companion status sourced from `/memory`.
//!
//! DESIGN
//! ======
//! History is server-owned. This state is a read-only cache of the last
//! `/memory` response plus the currently opened detail entry; the panel
//! derives its rows on demand instead of storing a pre-rendered slice.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::{DEFAULT_RECENT_MOOD, DEFAULT_RELATIONSHIP_DEPTH, MemorySnapshot};
use crate::util::time::format_history_timestamp;

/// Maximum number of rows rendered in the history panel.
pub const HISTORY_LIMIT: usize = 10;

/// Characters of the user message kept in a history preview.
pub const PREVIEW_CHARS: usize = 50;

/// Dominant emotions shown as badges in the companion sidebar.
pub const RECENT_EMOTION_LIMIT: usize = 5;

/// One stored exchange between the user and the companion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationRecord {
    /// ISO-8601 timestamp as sent by the backend.
    pub timestamp: String,
    pub user_message: String,
    pub ai_response: String,
    pub detected_emotion: String,
    /// `"adventure"` or `"chat"`.
    pub mode: String,
}

impl ConversationRecord {
    pub fn is_adventure(&self) -> bool {
        self.mode == "adventure"
    }

    pub fn preview(&self) -> String {
        truncate_preview(&self.user_message, PREVIEW_CHARS)
    }

    /// Short `"Mon D, HH:MM"` label for the panel row.
    pub fn time_label(&self) -> String {
        format_history_timestamp(&self.timestamp)
    }
}

/// Keep the first `max_chars` characters of `text`, appending `...` when cut.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Cached `/memory` data plus panel selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryState {
    /// Conversation log, oldest first.
    pub conversations: Vec<ConversationRecord>,
    pub relationship_depth: u32,
    pub dominant_emotions: Vec<String>,
    pub recent_mood: String,
    /// Entry opened in the detail view.
    pub selected: Option<ConversationRecord>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            conversations: Vec::new(),
            relationship_depth: DEFAULT_RELATIONSHIP_DEPTH,
            dominant_emotions: Vec::new(),
            recent_mood: DEFAULT_RECENT_MOOD.to_owned(),
            selected: None,
        }
    }
}

impl HistoryState {
    /// Replace the cache with a fresh `/memory` snapshot.
    pub fn apply(&mut self, snapshot: MemorySnapshot) {
        self.conversations = snapshot.conversations;
        self.relationship_depth = snapshot.relationship_depth;
        self.dominant_emotions = snapshot.dominant_emotions;
        self.recent_mood = snapshot.recent_mood;
    }

    /// The rows the panel renders: at most [`HISTORY_LIMIT`], newest first.
    pub fn recent(&self) -> Vec<&ConversationRecord> {
        let start = self.conversations.len().saturating_sub(HISTORY_LIMIT);
        self.conversations[start..].iter().rev().collect()
    }

    /// Last few dominant emotions for the sidebar badges.
    pub fn recent_emotions(&self) -> &[String] {
        let start = self.dominant_emotions.len().saturating_sub(RECENT_EMOTION_LIMIT);
        &self.dominant_emotions[start..]
    }

    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Open the detail view for the `index`-th row of [`Self::recent`].
    pub fn select_recent(&mut self, index: usize) -> bool {
        let picked = self.recent().get(index).map(|record| (*record).clone());
        let found = picked.is_some();
        if found {
            self.selected = picked;
        }
        found
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Drop the locally cached log. The backend copy is untouched.
    pub fn clear_view(&mut self) {
        self.conversations.clear();
        self.selected = None;
    }
}
