//! Blocking overlay while a chat request is in flight.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || state.with(|s| s.loading)>
            <div class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
                <span class="loading-overlay__label">"Thinking..."</span>
            </div>
        </Show>
    }
}
