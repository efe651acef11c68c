//! Networking modules for the companion HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and defines the `CompanionApi` seam the
//! session controller depends on; `types` defines the wire schema and its
//! normalization into render-ready values.

pub mod api;
pub mod types;
