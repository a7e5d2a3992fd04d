//! Personal-info tab: the full profile record with an edit action.

use leptos::prelude::*;

use crate::components::home_tab::{TagList, shown};
use crate::state::profile::{PersonaProfile, ProfileRecord};

#[component]
pub fn PersonalInfoTab(profile: RwSignal<ProfileRecord>, on_edit: Callback<()>) -> impl IntoView {
    let is_driver = move || profile.with(|p| matches!(p.persona, PersonaProfile::Driver { .. }));
    let languages = Signal::derive(move || profile.with(|p| p.personal_info.languages.clone()));
    let certificates = Signal::derive(move || profile.with(|p| p.personal_info.certificates.clone()));

    view! {
        <section class="card personal-tab">
            <div class="card__header">
                <h2>"Personal Information"</h2>
                <button class="btn btn--primary" on:click=move |_| on_edit.run(())>
                    "Edit"
                </button>
            </div>

            <h3>"Contact"</h3>
            <dl class="detail-list">
                <dt>"Full Name"</dt>
                <dd>{shown(profile, |p| &p.name)}</dd>
                <dt>"Email"</dt>
                <dd>{shown(profile, |p| &p.email)}</dd>
                <dt>"Phone"</dt>
                <dd>{shown(profile, |p| &p.phone)}</dd>
                <dt>"Address"</dt>
                <dd>{shown(profile, |p| &p.address)}</dd>
                <Show
                    when=is_driver
                    fallback=move || {
                        view! {
                            <dt>"Location"</dt>
                            <dd>{move || profile.with(ProfileRecord::location_text)}</dd>
                        }
                    }
                >
                    <dt>"Driving License"</dt>
                    <dd>{shown(profile, ProfileRecord::license_number)}</dd>
                </Show>
            </dl>

            <h3>"Details"</h3>
            <dl class="detail-list">
                <dt>"Date of Birth"</dt>
                <dd>{shown(profile, |p| &p.personal_info.date_of_birth)}</dd>
                <dt>"Blood Group"</dt>
                <dd>{shown(profile, |p| &p.personal_info.blood_group)}</dd>
            </dl>
            <h4>"Languages"</h4>
            <TagList items=languages/>
            <h4>"Certifications"</h4>
            <TagList items=certificates tag_class="tag tag--green"/>

            <h3>"Emergency Contact"</h3>
            <dl class="detail-list">
                <dt>"Name"</dt>
                <dd>{shown(profile, |p| &p.personal_info.emergency_contact.name)}</dd>
                <dt>"Phone"</dt>
                <dd>{shown(profile, |p| &p.personal_info.emergency_contact.phone)}</dd>
                <dt>"Relationship"</dt>
                <dd>{shown(profile, |p| &p.personal_info.emergency_contact.relationship)}</dd>
            </dl>
        </section>
    }
}
