//! Adventure-mode world panel: location, health, level and inventory.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::world::{EMPTY_INVENTORY_LABEL, WorldState};

/// Visible only while adventure mode is on.
#[component]
pub fn AdventurePanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let visible = move || state.with(SessionState::adventure_panel_visible);
    let world = move || state.with(|s| s.world.clone());

    view! {
        <Show when=visible>
            <section class="adventure-panel">
                <h3 class="adventure-panel__title">"🗺️ Adventure"</h3>
                {move || match world() {
                    Some(world) => view! { <WorldSummary world/> }.into_any(),
                    None => view! { <div class="adventure-panel__empty">"Exploring..."</div> }.into_any(),
                }}
            </section>
        </Show>
    }
}

#[component]
fn WorldSummary(world: WorldState) -> impl IntoView {
    let health = world.health_label();
    let level = world.level;
    let labels = world.inventory_labels();
    let inventory = if labels.is_empty() {
        view! { <span class="adventure-panel__item adventure-panel__item--empty">{EMPTY_INVENTORY_LABEL}</span> }
            .into_any()
    } else {
        labels
            .into_iter()
            .map(|label| view! { <span class="adventure-panel__item">{label}</span> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <dl class="adventure-panel__stats">
            <dt>"Location"</dt>
            <dd class="adventure-panel__location">{world.current_location}</dd>
            <dt>"Health"</dt>
            <dd class="adventure-panel__health">{health}</dd>
            <dt>"Level"</dt>
            <dd class="adventure-panel__level">{level}</dd>
        </dl>
        <div class="adventure-panel__inventory">{inventory}</div>
    }
}
