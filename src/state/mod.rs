//! Client-side state for the companion chat page.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `history`, `world`, `settings`) and
//! aggregated in `session::SessionState`, the single value the controller
//! mutates and the views read.

pub mod chat;
pub mod history;
pub mod session;
pub mod settings;
pub mod world;
