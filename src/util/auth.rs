//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both profile pages hydrate the same way: read the session mirror once at
//! mount, or bounce to the persona's login route when nobody is signed in.
//! Logging out leaves a notice that the login page shows in its banner.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::state::persona::Persona;
use crate::state::profile::ProfileRecord;
use crate::state::session::SessionContext;
use crate::util::storage::KeyValueStore;

pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

/// Build the page's profile from the current user, or redirect to
/// `persona`'s login route and return `None`.
pub fn hydrate_or_redirect<S, F>(session: &SessionContext<S>, persona: Persona, navigate: F) -> Option<ProfileRecord>
where
    S: KeyValueStore,
    F: Fn(&str, NavigateOptions),
{
    if let Some(user) = session.current_user() {
        return Some(ProfileRecord::from_user(&user, persona));
    }
    navigate(persona.login_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    None
}

/// Sign out and land on `persona`'s login route.
pub fn logout_and_redirect<S, F>(session: &SessionContext<S>, persona: Persona, navigate: F)
where
    S: KeyValueStore,
    F: Fn(&str, NavigateOptions),
{
    crate::net::api::logout(session);
    session.leave_notice(LOGGED_OUT_MESSAGE);
    navigate(persona.login_path(), NavigateOptions::default());
}
