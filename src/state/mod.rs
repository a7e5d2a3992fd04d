//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data plus pure transitions. Pages wrap these
//! values in Leptos signals; nothing in this layer touches the browser, which
//! keeps validation, merging, and navigation rules testable natively.

pub mod bookings;
pub mod login;
pub mod persona;
pub mod preferences;
pub mod profile;
pub mod registration;
pub mod route;
pub mod session;
pub mod shell;
pub mod tabs;
pub mod vehicles;
