use super::*;
use crate::state::chat::Sender;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_defaults() {
    let state = SessionState::default();
    assert!(state.transcript.is_empty());
    assert!(!state.loading);
    assert!(state.last_response.is_none());
    assert_eq!(state.mood, DEFAULT_RECENT_MOOD);
    assert_eq!(state.voice, VoiceInputState::Idle);
    assert!(state.speech_input.is_available());
    assert!(!state.adventure_panel_visible());
    assert_eq!(state.scroll_seq, 0);
}

#[test]
fn append_bumps_scroll_seq() {
    let mut state = SessionState::default();
    state.append(Message::new(Sender::User, "one", None, 0.0));
    state.append(Message::new(Sender::Ai, "two", None, 0.0));
    assert_eq!(state.transcript.len(), 2);
    assert_eq!(state.scroll_seq, 2);
}

#[test]
fn can_send_requires_text_and_idle() {
    let mut state = SessionState::default();
    assert!(!state.can_send());
    state.draft = "   ".into();
    assert!(!state.can_send());
    state.draft = "hi".into();
    assert!(state.can_send());
    state.loading = true;
    assert!(!state.can_send());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn rc_store_reads_back_writes() {
    let store = Rc::new(RefCell::new(SessionState::default()));
    store.write(|s| s.draft = "hello".into());
    assert_eq!(store.read(|s| s.draft.clone()), "hello");
    let cloned = store.clone();
    cloned.write(|s| s.loading = true);
    assert!(store.read(|s| s.loading));
}
