//! Wire DTOs for the companion HTTP endpoints.
//!
//! DESIGN
//! ======
//! The backend answers with loosely shaped JSON: several optional fields
//! overlap (`companion_emotion` vs `emotion`, `world_state` vs `context`).
//! Everything is deserialized leniently here and then normalized once into
//! [`CompanionReply`], [`MemorySnapshot`] and [`WorldState`] so the session
//! controller and views never branch on raw response shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::history::ConversationRecord;
use crate::state::world::{AdventureContext, WorldState};

/// Default relationship depth when the backend omits it.
pub const DEFAULT_RELATIONSHIP_DEPTH: u32 = 1;

/// Default companion mood when the backend has no emotional history yet.
pub const DEFAULT_RECENT_MOOD: &str = "curious";

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub adventure_mode: bool,
}

/// Body of `POST /adventure`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdventureRequest {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice: Option<String>,
}

impl AdventureRequest {
    /// Request a dice roll using standard notation such as `1d20`.
    pub fn roll_dice(notation: &str) -> Self {
        Self {
            action: "roll_dice".to_owned(),
            dice: Some(notation.to_owned()),
        }
    }
}

// =============================================================================
// RESPONSES (raw)
// =============================================================================

/// Raw body of a successful `POST /chat`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub companion_emotion: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub world_state: Option<WorldStatePayload>,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

/// Full world snapshot embedded in a chat response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WorldStatePayload {
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default = "default_health")]
    pub health: i64,
    #[serde(default = "default_level")]
    pub level: i64,
}

/// Partial adventure context embedded in a chat response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub adventure_active: bool,
    #[serde(default)]
    pub location: Option<LocationPayload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub relationship_depth: Option<u32>,
}

/// A location object; only its display name is used.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LocationPayload {
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw body of `GET /memory`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MemoryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversations: Vec<ConversationPayload>,
    #[serde(default)]
    pub relationship_depth: Option<u32>,
    #[serde(default)]
    pub emotional_patterns: Option<EmotionalPatterns>,
}

/// One stored exchange as returned by `/memory`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ConversationPayload {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, alias = "user_input")]
    pub user_message: String,
    #[serde(default)]
    pub ai_response: String,
    #[serde(default)]
    pub detected_emotion: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub adventure_active: Option<bool>,
}

/// Aggregate emotion data attached to `/memory`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EmotionalPatterns {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dominant_emotions: Vec<String>,
    #[serde(default)]
    pub recent_mood: Option<String>,
}

/// Raw body of `GET /world`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WorldResponse {
    #[serde(default)]
    pub locations: HashMap<String, LocationPayload>,
    #[serde(default)]
    pub current_location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub player_stats: PlayerStats,
}

/// Player statistics block of `/world`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlayerStats {
    #[serde(default = "default_health")]
    pub health: i64,
    #[serde(default = "default_level")]
    pub level: i64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: default_health(),
            level: default_level(),
        }
    }
}

/// Raw body of `POST /adventure`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdventureResponse {
    #[serde(default)]
    pub dice_result: Option<DiceResult>,
}

/// Outcome of a server-side dice roll; only the description is rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DiceResult {
    #[serde(default)]
    pub description: String,
}

fn default_health() -> i64 {
    100
}

fn default_level() -> i64 {
    1
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// NORMALIZED
// =============================================================================

/// A chat reply normalized for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanionReply {
    /// Reply text.
    pub text: String,
    /// Emotion for the mood indicator: `companion_emotion`, else `emotion`.
    pub mood: Option<String>,
    /// Emotion badge on the reply bubble: `emotion`, else `companion_emotion`.
    pub message_emotion: Option<String>,
    /// Full world snapshot, only when the response carried `world_state`.
    pub world: Option<WorldState>,
    /// Adventure strip data, only when the response carried `context`.
    pub context: Option<AdventureContext>,
    /// Relationship depth from `context`, if present.
    pub relationship_depth: Option<u32>,
}

impl From<ChatResponse> for CompanionReply {
    fn from(raw: ChatResponse) -> Self {
        let companion_emotion = non_blank(raw.companion_emotion);
        let emotion = non_blank(raw.emotion);
        let relationship_depth = raw.context.as_ref().and_then(|ctx| ctx.relationship_depth);
        Self {
            text: raw.response,
            mood: companion_emotion.clone().or_else(|| emotion.clone()),
            message_emotion: emotion.or(companion_emotion),
            world: raw.world_state.map(WorldState::from),
            context: raw.context.map(AdventureContext::from),
            relationship_depth,
        }
    }
}

impl From<WorldStatePayload> for WorldState {
    fn from(raw: WorldStatePayload) -> Self {
        WorldState::new(raw.current_location, raw.inventory, raw.health, raw.level)
    }
}

impl From<ChatContext> for AdventureContext {
    fn from(raw: ChatContext) -> Self {
        Self {
            active: raw.adventure_active,
            location: raw.location.and_then(|loc| non_blank(loc.name)),
            inventory: raw.inventory,
        }
    }
}

impl From<WorldResponse> for WorldState {
    fn from(raw: WorldResponse) -> Self {
        // Fall back to the location key when the map has no display name for it.
        let location = raw
            .locations
            .get(&raw.current_location)
            .and_then(|loc| non_blank(loc.name.clone()))
            .unwrap_or(raw.current_location);
        WorldState::new(location, raw.inventory, raw.player_stats.health, raw.player_stats.level)
    }
}

impl From<ConversationPayload> for ConversationRecord {
    fn from(raw: ConversationPayload) -> Self {
        let mode = non_blank(raw.mode).unwrap_or_else(|| {
            if raw.adventure_active.unwrap_or(false) {
                "adventure".to_owned()
            } else {
                "chat".to_owned()
            }
        });
        Self {
            timestamp: raw.timestamp,
            user_message: raw.user_message,
            ai_response: raw.ai_response,
            detected_emotion: non_blank(raw.detected_emotion).unwrap_or_else(|| "neutral".to_owned()),
            mode,
        }
    }
}

/// `/memory` normalized for the history panel and companion status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySnapshot {
    /// Full conversation log in the order the backend returned it.
    pub conversations: Vec<ConversationRecord>,
    pub relationship_depth: u32,
    pub dominant_emotions: Vec<String>,
    pub recent_mood: String,
}

impl From<MemoryResponse> for MemorySnapshot {
    fn from(raw: MemoryResponse) -> Self {
        let patterns = raw.emotional_patterns.unwrap_or_default();
        Self {
            conversations: raw.conversations.into_iter().map(ConversationRecord::from).collect(),
            relationship_depth: raw
                .relationship_depth
                .filter(|depth| *depth > 0)
                .unwrap_or(DEFAULT_RELATIONSHIP_DEPTH),
            dominant_emotions: patterns.dominant_emotions,
            recent_mood: non_blank(patterns.recent_mood).unwrap_or_else(|| DEFAULT_RECENT_MOOD.to_owned()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
