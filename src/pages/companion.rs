//! Panel layout with companion status, quick actions and a loading overlay.

use leptos::prelude::*;

use crate::components::adventure_panel::AdventurePanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::companion_sidebar::CompanionSidebar;
use crate::components::history_panel::HistoryPanel;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::quick_actions::QuickActions;
use crate::components::settings_panel::SettingsPanel;

#[component]
pub fn CompanionPage() -> impl IntoView {
    view! {
        <div class="companion-page">
            <div class="companion-page__left">
                <CompanionSidebar/>
                <QuickActions/>
                <SettingsPanel/>
            </div>
            <main class="companion-page__center">
                <header class="companion-page__header">
                    <h1>"Your AI Companion"</h1>
                    <a class="companion-page__link" href="/">"Compact view"</a>
                </header>
                <ChatPanel/>
                <AdventurePanel/>
            </main>
            <div class="companion-page__right">
                <HistoryPanel/>
            </div>
            <LoadingOverlay/>
        </div>
    }
}
