//! Mock backend and platform used by the session tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use super::ChatSession;
use crate::config::ClientConfig;
use crate::net::api::{ApiError, CompanionApi};
use crate::net::types::{
    AdventureRequest, AdventureResponse, ChatRequest, ChatResponse, ConversationPayload, EmotionalPatterns,
    MemoryResponse, WorldResponse,
};
use crate::platform::{Cue, CuePlayer, Platform, SpeechInput, SpeechOutput, Utterance, VoiceInfo};
use crate::state::session::SessionState;

pub type Store = Rc<RefCell<SessionState>>;

pub struct MockApi {
    pub chat_results: RefCell<VecDeque<Result<ChatResponse, ApiError>>>,
    pub memory_result: RefCell<Result<MemoryResponse, ApiError>>,
    pub world_result: RefCell<Result<WorldResponse, ApiError>>,
    pub adventure_result: RefCell<Result<AdventureResponse, ApiError>>,
    /// Endpoint names in call order.
    pub calls: RefCell<Vec<&'static str>>,
    pub chat_requests: RefCell<Vec<ChatRequest>>,
    pub adventure_requests: RefCell<Vec<AdventureRequest>>,
    /// When set, the next `/chat` call waits for this before answering.
    pub chat_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            chat_results: RefCell::new(VecDeque::new()),
            memory_result: RefCell::new(Ok(MemoryResponse::default())),
            world_result: RefCell::new(Ok(WorldResponse::default())),
            adventure_result: RefCell::new(Err(ApiError::Unavailable)),
            calls: RefCell::new(Vec::new()),
            chat_requests: RefCell::new(Vec::new()),
            adventure_requests: RefCell::new(Vec::new()),
            chat_gate: RefCell::new(None),
        }
    }

    pub fn queue_chat(&self, result: Result<ChatResponse, ApiError>) {
        self.chat_results.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }
}

impl CompanionApi for MockApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.calls.borrow_mut().push("chat");
        self.chat_requests.borrow_mut().push(request.clone());
        let gate = self.chat_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.chat_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Unavailable))
    }

    async fn memory(&self) -> Result<MemoryResponse, ApiError> {
        self.calls.borrow_mut().push("memory");
        self.memory_result.borrow().clone()
    }

    async fn world(&self) -> Result<WorldResponse, ApiError> {
        self.calls.borrow_mut().push("world");
        self.world_result.borrow().clone()
    }

    async fn adventure(&self, request: &AdventureRequest) -> Result<AdventureResponse, ApiError> {
        self.calls.borrow_mut().push("adventure");
        self.adventure_requests.borrow_mut().push(request.clone());
        self.adventure_result.borrow().clone()
    }
}

pub struct MockSpeechInput {
    pub supported: bool,
    pub start_result: RefCell<Result<(), String>>,
    pub starts: Cell<usize>,
    pub stops: Cell<usize>,
}

impl MockSpeechInput {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            start_result: RefCell::new(Ok(())),
            starts: Cell::new(0),
            stops: Cell::new(0),
        }
    }
}

impl SpeechInput for MockSpeechInput {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&self) -> Result<(), String> {
        self.starts.set(self.starts.get() + 1);
        self.start_result.borrow().clone()
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpeechEvent {
    Cancel,
    Speak(Utterance),
    Pause,
    Resume,
}

pub struct MockSpeechOutput {
    pub supported: bool,
    pub voices: RefCell<Vec<VoiceInfo>>,
    pub events: RefCell<Vec<SpeechEvent>>,
}

impl MockSpeechOutput {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            voices: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.borrow().clone()
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SpeechEvent::Speak(u) => Some(u.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SpeechOutput for MockSpeechOutput {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.borrow().clone()
    }

    fn speak(&self, utterance: &Utterance) {
        self.events.borrow_mut().push(SpeechEvent::Speak(utterance.clone()));
    }

    fn cancel(&self) {
        self.events.borrow_mut().push(SpeechEvent::Cancel);
    }

    fn pause(&self) {
        self.events.borrow_mut().push(SpeechEvent::Pause);
    }

    fn resume(&self) {
        self.events.borrow_mut().push(SpeechEvent::Resume);
    }
}

#[derive(Default)]
pub struct MockCues {
    pub played: RefCell<Vec<Cue>>,
}

impl MockCues {
    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }
}

impl CuePlayer for MockCues {
    fn play(&self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}

pub struct Harness {
    pub session: ChatSession<Store, MockApi>,
    pub state: Store,
    pub api: Rc<MockApi>,
    pub input: Rc<MockSpeechInput>,
    pub output: Rc<MockSpeechOutput>,
    pub cues: Rc<MockCues>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_support(true, true)
    }

    pub fn with_support(speech_input: bool, speech_output: bool) -> Self {
        let state: Store = Rc::new(RefCell::new(SessionState::default()));
        let api = Rc::new(MockApi::new());
        let input = Rc::new(MockSpeechInput::new(speech_input));
        let output = Rc::new(MockSpeechOutput::new(speech_output));
        let cues = Rc::new(MockCues::default());
        let platform = Platform {
            speech_input: input.clone(),
            speech_output: output.clone(),
            cues: cues.clone(),
        };
        let config = ClientConfig {
            greeting: None,
            ..ClientConfig::default()
        };
        let session = ChatSession::new(state.clone(), Rc::clone(&api), platform, config);
        Self {
            session,
            state,
            api,
            input,
            output,
            cues,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }
}

pub fn reply(text: &str, companion_emotion: Option<&str>) -> ChatResponse {
    ChatResponse {
        response: text.to_owned(),
        companion_emotion: companion_emotion.map(str::to_owned),
        ..ChatResponse::default()
    }
}

pub fn conversation(user: &str, ai: &str, emotion: &str) -> ConversationPayload {
    ConversationPayload {
        timestamp: "2024-05-01T14:03:00".to_owned(),
        user_message: user.to_owned(),
        ai_response: ai.to_owned(),
        detected_emotion: Some(emotion.to_owned()),
        ..ConversationPayload::default()
    }
}

pub fn memory(conversations: Vec<ConversationPayload>, depth: u32, recent_mood: &str) -> MemoryResponse {
    MemoryResponse {
        conversations,
        relationship_depth: Some(depth),
        emotional_patterns: Some(EmotionalPatterns {
            dominant_emotions: vec!["happy".to_owned()],
            recent_mood: Some(recent_mood.to_owned()),
        }),
    }
}
