//! Wiring shared by the rider and driver profile pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages hydrate the profile from the session at mount (or bounce to
//! login), keep a [`ProfileChrome`] in step with the window width, and save
//! personal-info edits by merging in memory and mirroring to the session.

#[cfg(test)]
#[path = "profile_common_test.rs"]
mod profile_common_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::banner::BannerMessage;
use crate::state::persona::Persona;
use crate::state::profile::{PersonalInfoUpdate, ProfileRecord, merge_personal_info};
use crate::state::session::{Persisted, SessionContext};
use crate::state::tabs::{ProfileChrome, TabSet};
use crate::util::auth::{hydrate_or_redirect, logout_and_redirect};
use crate::util::storage::KeyValueStore;
use crate::util::viewport::{on_resize, viewport_width};

pub(crate) const UPDATED_MESSAGE: &str = "Personal information updated successfully";

/// Merge `update` into `current` and mirror the result into the session.
/// The merged record is returned even when the write-back fails.
pub(crate) fn apply_personal_edit<S: KeyValueStore>(
    session: &SessionContext<S>,
    current: &ProfileRecord,
    update: &PersonalInfoUpdate,
) -> (ProfileRecord, Persisted) {
    let next = merge_personal_info(current, update);
    let persisted = session.persist_profile(&next);
    match &persisted {
        Persisted::Written => log::info!("personal information saved"),
        Persisted::NoSession => log::warn!("no current user; edit kept in memory only"),
        Persisted::Failed(e) => log::warn!("personal information not stored: {e}"),
    }
    (next, persisted)
}

/// Signals owned by a profile page.
#[derive(Clone, Copy)]
pub(crate) struct ProfilePage<T: TabSet> {
    pub profile: RwSignal<ProfileRecord>,
    pub chrome: RwSignal<ProfileChrome<T>>,
    pub editing: RwSignal<bool>,
    pub banner: RwSignal<Option<BannerMessage>>,
    pub on_save: Callback<PersonalInfoUpdate>,
    pub on_logout: Callback<()>,
}

pub(crate) fn use_profile_page<T: TabSet>(persona: Persona) -> ProfilePage<T> {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let profile = RwSignal::new(ProfileRecord::empty(persona));
    let chrome = RwSignal::new(ProfileChrome::<T>::new(viewport_width()));
    let editing = RwSignal::new(false);
    let banner = RwSignal::new(None::<BannerMessage>);

    let hydrate_session = session.clone();
    let hydrate_navigate = navigate.clone();
    Effect::new(move || {
        if let Some(record) = hydrate_or_redirect(&hydrate_session, persona, &hydrate_navigate) {
            profile.set(record);
        }
    });

    on_resize(move |width| chrome.update(|c| c.shell.set_viewport_width(width)));

    let save_session = session.clone();
    let on_save = Callback::new(move |update: PersonalInfoUpdate| {
        let (next, _) = profile.with_untracked(|current| apply_personal_edit(&save_session, current, &update));
        profile.set(next);
        editing.set(false);
        banner.set(Some(BannerMessage::success(UPDATED_MESSAGE, None)));
    });

    let logout_requested = RwSignal::new(false);
    Effect::new(move || {
        if logout_requested.get() {
            chrome.update(|c| c.tabs.reset());
            logout_and_redirect(&session, persona, &navigate);
        }
    });
    let on_logout = Callback::new(move |()| logout_requested.set(true));

    ProfilePage { profile, chrome, editing, banner, on_save, on_logout }
}
