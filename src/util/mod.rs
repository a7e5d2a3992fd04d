//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, geolocation, maps,
//! viewport, clock) from page and component logic so the state layer stays
//! testable natively.

pub mod auth;
pub mod dates;
pub mod geolocation;
pub mod maps;
pub mod storage;
pub mod validate;
pub mod viewport;
