//! Conversation history list with a detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come from the cached `/memory` snapshot in `HistoryState`, newest
//! first. Clearing only empties the local view; the next refresh after a
//! chat repopulates it from the backend.

#[cfg(test)]
#[path = "history_panel_test.rs"]
mod history_panel_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::history::ConversationRecord;
use crate::state::session::SessionState;
use crate::util::emotion::badge_class;
use crate::util::time::format_detail_timestamp;

const CLEAR_CONFIRM: &str = "Clear the conversation history from this view?";

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = use_session();

    let rows = move || {
        state.with(|s| {
            s.history
                .recent()
                .into_iter()
                .cloned()
                .collect::<Vec<ConversationRecord>>()
        })
    };
    let selected = move || state.with(|s| s.history.selected.clone());

    let on_clear = move |_| {
        if confirm(CLEAR_CONFIRM) {
            session.get().clear_history();
        }
    };

    view! {
        <section class="history-panel">
            <div class="history-panel__header">
                <h3 class="history-panel__title">"💭 Recent Conversations"</h3>
                <button class="btn btn--small history-panel__clear" on:click=on_clear>"Clear"</button>
            </div>
            <div class="history-panel__list">
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <div class="history-panel__empty">"No conversations yet"</div> }.into_any();
                    }
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, record)| view! { <HistoryRow index record/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
            {move || selected().map(|record| view! { <HistoryDetail record/> })}
        </section>
    }
}

#[component]
fn HistoryRow(index: usize, record: ConversationRecord) -> impl IntoView {
    let session = use_session();
    let time = record.time_label();
    let preview = record.preview();
    let adventure = record.is_adventure();
    let badge = badge_class(&record.detected_emotion);
    let emotion = record.detected_emotion;

    view! {
        <button class="history-row" on:click=move |_| session.get().select_history(index)>
            <div class="history-row__meta">
                <span class="history-row__time">{time}</span>
                <span class=badge>{emotion}</span>
                {adventure.then(|| view! { <span class="history-row__mode" title="Adventure mode">"🏰"</span> })}
            </div>
            <div class="history-row__preview">{preview}</div>
        </button>
    }
}

#[component]
fn HistoryDetail(record: ConversationRecord) -> impl IntoView {
    let session = use_session();
    let close = move |_| session.get().close_history_detail();
    let time = format_detail_timestamp(&record.timestamp);
    let mode = mode_label(&record);
    let badge = badge_class(&record.detected_emotion);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal history-detail" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h4 class="modal__title">"Conversation Details"</h4>
                    <button class="modal__close" title="Close" on:click=close>"×"</button>
                </div>
                <div class="modal__body">
                    <p class="history-detail__meta">
                        <strong>"Time: "</strong>{time}
                        " · "
                        <strong>"Mode: "</strong>{mode}
                        " · "
                        <strong>"Emotion: "</strong>
                        <span class=badge>{record.detected_emotion}</span>
                    </p>
                    <div class="history-detail__message history-detail__message--user">
                        <strong>"You: "</strong>{record.user_message}
                    </div>
                    <div class="history-detail__message history-detail__message--ai">
                        <strong>"Companion: "</strong>{record.ai_response}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Mode line for the detail view.
pub(crate) fn mode_label(record: &ConversationRecord) -> &'static str {
    if record.is_adventure() { "Adventure" } else { "Chat" }
}

fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
