//! Networking modules for the authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the wire schema shared
//! with local storage.

pub mod api;
pub mod types;
