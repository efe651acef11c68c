//! One-click shortcuts: activity suggestion, dice roll, memory recall.

use leptos::prelude::*;

use crate::app::use_session;
use crate::session::DEFAULT_DICE;
use crate::state::session::SessionState;

#[component]
pub fn QuickActions() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = use_session();
    let busy = move || state.with(|s| s.loading);

    let on_suggest = move |_| session.spawn(|s| async move { s.suggest_activity().await; });
    let on_roll = move |_| session.spawn(|s| async move { s.roll_dice(DEFAULT_DICE).await });
    let on_recall = move |_| session.spawn(|s| async move { s.recall_memory().await });

    view! {
        <section class="quick-actions">
            <h3 class="quick-actions__title">"⚡ Quick Actions"</h3>
            <button class="btn quick-actions__button" disabled=busy on:click=on_suggest>"🎯 Suggest Activity"</button>
            <button class="btn quick-actions__button" on:click=on_roll>"🎲 Roll Dice"</button>
            <button class="btn quick-actions__button" on:click=on_recall>"🧠 Recall Memory"</button>
        </section>
    }
}
