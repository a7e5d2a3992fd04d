//! Driver dashboard: profile summary, bookings, vehicles, and settings.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::banner::Banner;
use crate::components::bookings_tab::BookingsTab;
use crate::components::header::ProfileHeader;
use crate::components::home_tab::DriverHomeTab;
use crate::components::personal_info_modal::PersonalInfoModal;
use crate::components::personal_tab::PersonalInfoTab;
use crate::components::settings_tab::DriverSettingsTab;
use crate::components::sidebar::Sidebar;
use crate::components::vehicles_tab::VehiclesTab;
use crate::pages::profile_common::use_profile_page;
use crate::state::persona::Persona;
use crate::state::tabs::DriverTab;

#[component]
pub fn DriverProfilePage() -> impl IntoView {
    let page = use_profile_page::<DriverTab>(Persona::Driver);
    let profile = page.profile;
    let active = Memo::new(move |_| page.chrome.with(|c| c.tabs.active()));
    let on_edit = Callback::new(move |()| page.editing.set(true));

    let panel = move || match active.get() {
        DriverTab::Home => view! { <DriverHomeTab profile=profile on_edit=on_edit/> }.into_any(),
        DriverTab::PersonalInfo => view! { <PersonalInfoTab profile=profile on_edit=on_edit/> }.into_any(),
        DriverTab::Bookings => view! { <BookingsTab title="Bookings"/> }.into_any(),
        DriverTab::Vehicles => view! { <VehiclesTab/> }.into_any(),
        DriverTab::Settings => view! { <DriverSettingsTab profile=profile on_clear=page.on_logout/> }.into_any(),
    };

    view! {
        <div class="profile-page profile-page--driver">
            <ProfileHeader
                title="Driver Dashboard"
                profile=profile
                on_toggle_menu=Callback::new(move |()| page.chrome.update(|c| c.shell.toggle()))
                on_logout=page.on_logout
            />
            <div class="profile-layout">
                <Sidebar chrome=page.chrome profile=profile/>
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
