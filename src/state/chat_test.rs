use super::*;

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn transcript_preserves_insertion_order() {
    let mut transcript = Transcript::default();
    transcript.push(Message::new(Sender::User, "hello", None, 1.0));
    transcript.push(Message::new(Sender::Ai, "Hi there!", Some("happy".into()), 2.0));
    let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["hello", "Hi there!"]);
    assert_eq!(transcript.last().map(|m| m.sender), Some(Sender::Ai));
}

#[test]
fn transcript_counts_by_sender() {
    let mut transcript = Transcript::default();
    transcript.push(Message::new(Sender::User, "a", None, 0.0));
    transcript.push(Message::new(Sender::Error, "b", None, 0.0));
    transcript.push(Message::new(Sender::User, "c", None, 0.0));
    assert_eq!(transcript.count_by(Sender::User), 2);
    assert_eq!(transcript.count_by(Sender::Error), 1);
    assert_eq!(transcript.count_by(Sender::Ai), 0);
}

// =============================================================
// Message / Sender
// =============================================================

#[test]
fn message_ids_are_unique() {
    let a = Message::new(Sender::User, "x", None, 0.0);
    let b = Message::new(Sender::User, "x", None, 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn sender_modifiers_are_distinct() {
    let all = [Sender::User, Sender::Ai, Sender::System, Sender::Error];
    let mods: std::collections::HashSet<&str> = all.iter().map(|s| s.css_modifier()).collect();
    assert_eq!(mods.len(), all.len());
}

#[test]
fn only_ai_and_system_are_companion_voiced() {
    assert!(Sender::Ai.is_companion());
    assert!(Sender::System.is_companion());
    assert!(!Sender::User.is_companion());
    assert!(!Sender::Error.is_companion());
}
