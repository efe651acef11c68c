//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Both pages drive the same session; they differ only in layout. `chat` is
//! the compact single-column layout, `companion` the panel layout with a
//! status sidebar, quick actions and a blocking loading overlay.

pub mod chat;
pub mod companion;
