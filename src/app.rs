//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `SessionState` signal and the `ChatSession` that
//! mutates it. Both are provided as context; components read the signal for
//! rendering and go through [`SessionHandle`] for every action.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpCompanionApi;
use crate::pages::{chat::ChatPage, companion::CompanionPage};
use crate::platform::Platform;
use crate::session::ChatSession;
use crate::state::session::SessionState;

/// The session controller as wired in the browser.
pub type Session = ChatSession<RwSignal<SessionState>, HttpCompanionApi>;

/// Copyable handle to the page's [`Session`], provided as context.
///
/// The session holds `Rc`s, so it lives in local arena storage.
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<Session, LocalStorage>);

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self(StoredValue::new_local(session))
    }

    pub fn get(self) -> Session {
        self.0.get_value()
    }

    /// Run an async session action on the page's event loop.
    pub fn spawn<F, Fut>(self, action: F)
    where
        F: FnOnce(Session) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let session = self.get();
            leptos::task::spawn_local(action(session));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    }
}

/// Fetch the session handle from context.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(SessionState::default());
    provide_context(state);

    let config = ClientConfig::default();
    let api = Rc::new(HttpCompanionApi::new(config.api_base.clone()));
    let (platform, wiring) = browser_platform(&config);
    let handle = SessionHandle::new(ChatSession::new(state, api, platform, config));
    provide_context(handle);

    wiring.attach(handle);
    handle.spawn(|session| async move { session.load_initial().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/companion.css"/>
        <Title text="AI Companion"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("companion") view=CompanionPage/>
            </Routes>
        </Router>
    }
}

/// Browser objects that push events back into the session once it exists.
struct PlatformWiring {
    #[cfg(feature = "hydrate")]
    recognition: Option<Rc<crate::platform::recognition::BrowserRecognition>>,
}

impl PlatformWiring {
    fn attach(self, handle: SessionHandle) {
        #[cfg(feature = "hydrate")]
        {
            use crate::platform::recognition::RecognitionHandlers;

            if let Some(recognition) = self.recognition {
                recognition.bind(RecognitionHandlers {
                    on_start: Box::new(move || handle.get().on_recognition_start()),
                    on_result: Box::new(move |text| {
                        handle.spawn(|session| async move { session.on_recognition_result(text).await });
                    }),
                    on_error: Box::new(move |code| handle.get().on_recognition_error(&code)),
                    on_end: Box::new(move || handle.get().on_recognition_end()),
                });
            }
            crate::util::visibility::on_visibility_change(move |hidden| handle.get().visibility_changed(hidden));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self, handle);
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_platform(config: &ClientConfig) -> (Platform, PlatformWiring) {
    use crate::platform::cues::ToneCuePlayer;
    use crate::platform::recognition::BrowserRecognition;
    use crate::platform::synthesis::BrowserSynthesis;
    use crate::platform::{NoSpeechInput, NoSpeechOutput, SpeechInput, SpeechOutput};

    let recognition = BrowserRecognition::new(&config.recognition_lang).map(Rc::new);
    let speech_input: Rc<dyn SpeechInput> = match &recognition {
        Some(r) => r.clone(),
        None => Rc::new(NoSpeechInput),
    };
    let speech_output: Rc<dyn SpeechOutput> = match BrowserSynthesis::new() {
        Some(s) => Rc::new(s),
        None => Rc::new(NoSpeechOutput),
    };
    let platform = Platform {
        speech_input,
        speech_output,
        cues: Rc::new(ToneCuePlayer::new()),
    };
    (platform, PlatformWiring { recognition })
}

#[cfg(not(feature = "hydrate"))]
fn browser_platform(_config: &ClientConfig) -> (Platform, PlatformWiring) {
    (Platform::unsupported(), PlatformWiring {})
}
