//! Companion status sidebar for the panel layout.
//!
//! Mood and relationship data come from `/memory`; the adventure strip comes
//! from the `context` block of the latest chat reply.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::world::AdventureContext;
use crate::util::emotion::{badge_class, indicator_glyph, mood_description};

#[component]
pub fn CompanionSidebar() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    let mood = move || state.with(|s| s.mood.clone());
    let recent_mood = move || state.with(|s| s.history.recent_mood.clone());
    let conversation_count = move || state.with(|s| s.history.conversation_count());
    let depth = move || state.with(|s| s.history.relationship_depth);
    let emotions = move || state.with(|s| s.history.recent_emotions().to_vec());
    let context = move || state.with(|s| s.adventure_context.clone().unwrap_or_default());

    view! {
        <aside class="companion-sidebar">
            <div class="companion-sidebar__avatar">
                <span class="companion-sidebar__glyph">{move || indicator_glyph(&mood())}</span>
                <span class="companion-sidebar__mood">{move || mood_description(&recent_mood())}</span>
            </div>

            <dl class="companion-sidebar__stats">
                <dt>"Conversations"</dt>
                <dd>{conversation_count}</dd>
                <dt>"Relationship depth"</dt>
                <dd>{depth}</dd>
            </dl>

            <div class="companion-sidebar__emotions">
                <h4>"Recent emotions"</h4>
                {move || {
                    emotions()
                        .into_iter()
                        .map(|emotion| {
                            let class = badge_class(&emotion);
                            view! { <span class=class>{emotion}</span> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            {move || view! { <ContextStrip context=context()/> }}
        </aside>
    }
}

#[component]
fn ContextStrip(context: AdventureContext) -> impl IntoView {
    let status = context.status_label();
    let location = context.sidebar_location_label().to_owned();
    let items = context.active.then(|| context.item_count_label());

    view! {
        <div class="companion-sidebar__context" class:companion-sidebar__context--active=context.active>
            <span class="companion-sidebar__status">{status}</span>
            <span class="companion-sidebar__location">{location}</span>
            {items.map(|items| view! { <span class="companion-sidebar__items">{items}</span> })}
        </div>
    }
}
