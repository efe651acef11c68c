//! Toggles for auto-speak, sound effects, voice speed and adventure mode.

#[cfg(test)]
#[path = "settings_panel_test.rs"]
mod settings_panel_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::state::session::SessionState;
use crate::state::settings::{VOICE_RATE_MAX, VOICE_RATE_MIN, VOICE_RATE_STEP};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let session = use_session();

    let auto_speak = move || state.with(|s| s.settings.auto_speak);
    let sound_effects = move || state.with(|s| s.settings.sound_effects);
    let adventure_mode = move || state.with(|s| s.settings.adventure_mode);
    let voice_rate = move || state.with(|s| s.settings.voice_rate());
    let speech_output_unavailable = move || state.with(|s| !s.speech_output.is_available());

    let on_adventure = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        session.spawn(move |s| async move { s.set_adventure_mode(enabled).await });
    };

    view! {
        <section class="settings-panel">
            <h3 class="settings-panel__title">"⚙️ Settings"</h3>
            <label class="settings-panel__row">
                <input
                    type="checkbox"
                    prop:checked=adventure_mode
                    on:change=on_adventure
                />
                <span>"Adventure mode"</span>
            </label>
            <label class="settings-panel__row">
                <input
                    type="checkbox"
                    prop:checked=auto_speak
                    disabled=speech_output_unavailable
                    on:change=move |ev| session.get().set_auto_speak(event_target_checked(&ev))
                />
                <span>"Auto-speak replies"</span>
            </label>
            <label class="settings-panel__row">
                <input
                    type="checkbox"
                    prop:checked=sound_effects
                    on:change=move |ev| session.get().set_sound_effects(event_target_checked(&ev))
                />
                <span>"Sound effects"</span>
            </label>
            <label class="settings-panel__row settings-panel__row--slider">
                <span>"Voice speed"</span>
                <input
                    type="range"
                    min=VOICE_RATE_MIN.to_string()
                    max=VOICE_RATE_MAX.to_string()
                    step=VOICE_RATE_STEP.to_string()
                    prop:value=move || voice_rate().to_string()
                    on:input=move |ev| session.get().set_voice_rate_from_input(&event_target_value(&ev))
                />
                <span class="settings-panel__value">{move || rate_label(voice_rate())}</span>
            </label>
        </section>
    }
}

/// Slider readout, e.g. `1.5x`.
pub(crate) fn rate_label(rate: f32) -> String {
    format!("{rate:.1}x")
}
