//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, document
//! visibility) and presentation tables from the controller and components.

pub mod emotion;
pub mod markdown;
pub mod time;
pub mod visibility;
