use super::*;

fn record(mode: &str) -> ConversationRecord {
    ConversationRecord {
        timestamp: "2024-01-09T07:05:00".into(),
        user_message: "hi".into(),
        ai_response: "hello".into(),
        detected_emotion: "happy".into(),
        mode: mode.into(),
    }
}

#[test]
fn mode_label_names_adventure_records() {
    assert_eq!(mode_label(&record("adventure")), "Adventure");
    assert_eq!(mode_label(&record("chat")), "Chat");
}
