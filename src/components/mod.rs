//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the shared `SessionState` signal and send every
//! user action through the session controller.

pub mod adventure_panel;
pub mod chat_panel;
pub mod companion_sidebar;
pub mod history_panel;
pub mod loading_overlay;
pub mod mood_indicator;
pub mod quick_actions;
pub mod settings_panel;
