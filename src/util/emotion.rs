//! Presentation tables for backend emotion labels.
//!
//! Emotions are opaque strings computed by the backend; the client only maps
//! them to badge tones, indicator glyphs and mood descriptions. Unknown
//! labels fall back to neutral presentation.

#[cfg(test)]
#[path = "emotion_test.rs"]
mod emotion_test;

/// Badge color tone for an emotion label.
pub fn badge_tone(emotion: &str) -> &'static str {
    match emotion {
        "happy" => "warning",
        "sad" => "info",
        "angry" | "loving" => "danger",
        "curious" => "primary",
        "excited" | "grateful" => "success",
        "nostalgic" => "dark",
        "confused" => "muted",
        _ => "secondary",
    }
}

/// CSS classes for an emotion badge.
pub fn badge_class(emotion: &str) -> String {
    format!("emotion-badge emotion-badge--{}", badge_tone(emotion))
}

/// Glyph shown next to the mood indicator.
pub fn indicator_glyph(emotion: &str) -> &'static str {
    match emotion {
        "happy" => "😊",
        "sad" => "😢",
        "angry" => "😠",
        "fearful" | "anxious" => "😟",
        "curious" => "🤔",
        "loving" => "❤️",
        "excited" => "🤩",
        "grateful" => "🥰",
        "nostalgic" => "🌅",
        "lonely" => "🫂",
        "confused" => "😕",
        _ => "😐",
    }
}

/// Sentence describing the companion's mood in the panel layout.
pub fn mood_description(emotion: &str) -> &'static str {
    match emotion {
        "happy" => "Joyful and energetic",
        "sad" => "Thoughtful and empathetic",
        "curious" => "Curious and ready to chat",
        "excited" => "Excited and enthusiastic",
        "anxious" => "Concerned and supportive",
        "grateful" => "Warm and appreciative",
        "nostalgic" => "Reflective and contemplative",
        "neutral" => "Calm and attentive",
        _ => "Ready to chat",
    }
}
