//! Compact chat layout.

use leptos::prelude::*;

use crate::components::adventure_panel::AdventurePanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::history_panel::HistoryPanel;
use crate::components::mood_indicator::MoodIndicator;
use crate::components::settings_panel::SettingsPanel;

/// Chat page: transcript in the main column, world, history and settings
/// beside it.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"🤖 AI Companion"</h1>
                <MoodIndicator/>
                <a class="chat-page__link" href="/companion">"Panel view"</a>
            </header>
            <main class="chat-page__main">
                <ChatPanel/>
            </main>
            <aside class="chat-page__side">
                <AdventurePanel/>
                <HistoryPanel/>
                <SettingsPanel/>
            </aside>
        </div>
    }
}
