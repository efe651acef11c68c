//! Companion mood badge shown in the chat header.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::emotion::indicator_glyph;

#[component]
pub fn MoodIndicator() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let mood = move || state.with(|s| s.mood.clone());

    view! {
        <div class="mood-indicator" title="Companion mood">
            <span class="mood-indicator__glyph">{move || indicator_glyph(&mood())}</span>
            <span class="mood-indicator__label">{mood}</span>
        </div>
    }
}
