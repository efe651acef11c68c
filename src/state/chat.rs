//! Conversation transcript shown in the chat panel.
//!
//! The transcript is append-only for the life of a page: entries are never
//! edited, reordered or removed once pushed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who a transcript entry is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    /// Text the user typed or spoke.
    User,
    /// A companion reply, or an AI-voiced notice such as a dice roll.
    Ai,
    /// Client-generated notices (mode changes, history cleared).
    System,
    /// Error bubble for failed requests or voice problems.
    Error,
}

impl Sender {
    /// BEM modifier used by the transcript view.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
            Self::System => "system",
            Self::Error => "error",
        }
    }

    /// Whether the entry is voiced by the companion (icon + markdown body).
    pub fn is_companion(self) -> bool {
        matches!(self, Self::Ai | Self::System)
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
    pub emotion: Option<String>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, emotion: Option<String>, timestamp_ms: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp_ms,
            emotion,
        }
    }
}

/// Ordered, append-only list of transcript entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of entries attributed to `sender`.
    pub fn count_by(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }
}
