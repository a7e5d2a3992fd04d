//! Rider profile page: sidebar navigation over six account tabs.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::banner::Banner;
use crate::components::bookings_tab::BookingsTab;
use crate::components::header::ProfileHeader;
use crate::components::home_tab::RiderHomeTab;
use crate::components::personal_info_modal::PersonalInfoModal;
use crate::components::personal_tab::PersonalInfoTab;
use crate::components::settings_tab::{DataPanel, PrivacyPanel, SecurityPanel};
use crate::components::sidebar::Sidebar;
use crate::pages::profile_common::use_profile_page;
use crate::state::persona::Persona;
use crate::state::tabs::RiderTab;

#[component]
pub fn RiderProfilePage() -> impl IntoView {
    let page = use_profile_page::<RiderTab>(Persona::Rider);
    let profile = page.profile;
    let active = Memo::new(move |_| page.chrome.with(|c| c.tabs.active()));

    let on_select = Callback::new(move |tab| page.chrome.update(|c| c.select_tab(tab)));
    let on_edit = Callback::new(move |()| page.editing.set(true));

    let panel = move || match active.get() {
        RiderTab::Home => view! { <RiderHomeTab profile=profile on_select=on_select/> }.into_any(),
        RiderTab::Personal => view! { <PersonalInfoTab profile=profile on_edit=on_edit/> }.into_any(),
        RiderTab::Bookings => view! { <BookingsTab/> }.into_any(),
        RiderTab::Security => view! { <SecurityPanel profile=profile/> }.into_any(),
        RiderTab::Privacy => view! { <PrivacyPanel/> }.into_any(),
        RiderTab::Data => view! { <DataPanel on_clear=page.on_logout/> }.into_any(),
    };

    view! {
        <div class="profile-page profile-page--rider">
            <ProfileHeader
                title="My Profile"
                profile=profile
                on_toggle_menu=Callback::new(move |()| page.chrome.update(|c| c.shell.toggle()))
                on_logout=page.on_logout
            />
            <div class="profile-layout">
                <Sidebar chrome=page.chrome profile=profile on_logout=page.on_logout/>
                <main class="profile-content">
                    <Banner message=page.banner/>
                    {panel}
                </main>
            </div>
            <Show when=move || page.editing.get()>
                <PersonalInfoModal
                    profile=profile
                    on_save=page.on_save
                    on_close=Callback::new(move |()| page.editing.set(false))
                />
            </Show>
        </div>
    }
}
