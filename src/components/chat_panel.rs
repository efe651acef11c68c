//! Transcript and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the append-only transcript from `SessionState` and routes the
//! send, mic and speak controls to the session controller. The message list
//! scrolls to the bottom whenever `scroll_seq` changes.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::chat::{Message, Sender};
use crate::state::session::SessionState;
use crate::state::settings::Capability;
use crate::util::emotion::badge_class;
use crate::util::markdown::render_markdown_html;
use crate::util::time::format_clock;

/// Chat transcript with the message input underneath.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = use_session();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(|s| s.scroll_seq);
        let _ = state.with(|s| s.loading);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_send = move || session.spawn(|s| async move { s.send_draft().await; });
    let on_click = move |_| on_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send();
        }
    };
    let on_mic = move |_| session.get().toggle_listening();
    let on_speak = move |_| session.get().speak_last_response();

    let loading = move || state.with(|s| s.loading);
    let listening = move || state.with(SessionState::is_listening);
    let can_send = move || state.with(SessionState::can_send);
    let mic_title = move || state.with(|s| mic_button_title(&s.speech_input, s.is_listening()));
    let speak_title = move || state.with(|s| speak_button_title(&s.speech_output));

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    state
                        .with(|s| s.transcript.messages().to_vec())
                        .into_iter()
                        .map(|msg| view! { <MessageBubble message=msg/> })
                        .collect::<Vec<_>>()
                }}
                <Show when=loading>
                    <div class="chat-panel__typing">"Companion is thinking..."</div>
                </Show>
            </div>

            <Show when=listening>
                <div class="chat-panel__listening">"🎤 Listening..."</div>
            </Show>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| session.get().set_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn chat-panel__mic"
                    class:chat-panel__mic--active=listening
                    title=mic_title
                    disabled=move || state.with(|s| !s.speech_input.is_available())
                    on:click=on_mic
                >
                    {move || if listening() { "⏹" } else { "🎤" }}
                </button>
                <button
                    class="btn chat-panel__speak"
                    title=speak_title
                    disabled=move || state.with(|s| !s.speech_output.is_available() || s.last_response.is_none())
                    on:click=on_speak
                >
                    "🔊"
                </button>
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    {move || if loading() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

/// One transcript entry.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let Message {
        sender,
        text,
        timestamp_ms,
        emotion,
        ..
    } = message;
    let class = format!("chat-message chat-message--{}", sender.css_modifier());
    let body = if sender.is_companion() {
        view! { <div class="chat-message__body chat-message__markdown" inner_html=render_markdown_html(&text)></div> }
            .into_any()
    } else {
        view! { <div class="chat-message__body">{text}</div> }.into_any()
    };
    let badge = (sender == Sender::Ai)
        .then_some(emotion)
        .flatten()
        .map(|emotion| {
            let class = badge_class(&emotion);
            view! { <span class=class>{emotion}</span> }
        });

    view! {
        <div class=class>
            {body}
            <div class="chat-message__meta">
                <span class="chat-message__time">{format_clock(timestamp_ms)}</span>
                {badge}
            </div>
        </div>
    }
}

/// Tooltip for the mic button.
pub(crate) fn mic_button_title(capability: &Capability, listening: bool) -> String {
    match capability.reason() {
        Some(reason) => reason.to_owned(),
        None if listening => "Stop listening".to_owned(),
        None => "Start voice input".to_owned(),
    }
}

/// Tooltip for the speak button.
pub(crate) fn speak_button_title(capability: &Capability) -> String {
    capability.reason().unwrap_or("Read the last reply aloud").to_owned()
}
