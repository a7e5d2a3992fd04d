//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (drafts, profile record, tab
//! chrome, route query) and delegates rendering details to `components`.

pub mod driver_profile;
pub mod home;
pub mod login;
pub mod map;
pub(crate) mod profile_common;
pub mod register;
pub mod rider_profile;
