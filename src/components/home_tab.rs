//! Home tab for both personas.
//!
//! Riders get a profile card, recent bookings, and account shortcuts that
//! jump to other tabs. Drivers get their identity card plus a personal-info
//! summary with an edit action.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::bookings_tab::StatusTag;
use crate::components::sidebar::Avatar;
use crate::state::bookings::SAMPLE_BOOKINGS;
use crate::state::profile::{NOT_SET, ProfileRecord, display_or_not_set};
use crate::state::tabs::RiderTab;

struct AccountSection {
    title: &'static str,
    description: &'static str,
    tab: RiderTab,
}

const ACCOUNT_SECTIONS: [AccountSection; 3] = [
    AccountSection { title: "Personal Information", description: "Name, email, phone", tab: RiderTab::Personal },
    AccountSection { title: "Security Settings", description: "Password settings", tab: RiderTab::Security },
    AccountSection { title: "Privacy Preferences", description: "Notification settings", tab: RiderTab::Privacy },
];

#[component]
pub fn RiderHomeTab(profile: RwSignal<ProfileRecord>, on_select: Callback<RiderTab>) -> impl IntoView {
    let recent = SAMPLE_BOOKINGS
        .iter()
        .map(|b| {
            view! {
                <li class="overview__booking">
                    <div>
                        <p class="overview__vehicle">{b.vehicle}</p>
                        <p class="overview__dates">{b.date_range()}</p>
                    </div>
                    <StatusTag status=b.status/>
                </li>
            }
        })
        .collect_view();

    let sections = ACCOUNT_SECTIONS
        .iter()
        .map(|s| {
            let tab = s.tab;
            view! {
                <li class="overview__section">
                    <div>
                        <p class="overview__section-title">{s.title}</p>
                        <p class="overview__section-desc">{s.description}</p>
                    </div>
                    <button class="btn btn--link" on:click=move |_| on_select.run(tab)>
                        "Edit"
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="home-tab home-tab--rider">
            <section class="card profile-card">
                <Avatar profile=profile class_name="profile-card__avatar"/>
                <h3>{move || profile.with(|p| p.name.clone())}</h3>
                <p>{move || profile.with(|p| p.email.clone())}</p>
                <p>{move || profile.with(|p| display_or_not_set(&p.phone).to_owned())}</p>
                <p>{move || profile.with(ProfileRecord::location_text)}</p>
            </section>
            <section class="card overview">
                <div class="overview__column">
                    <h3>"Recent Overview"</h3>
                    <ul>{recent}</ul>
                </div>
                <div class="overview__column">
                    <h3>"Account Overview"</h3>
                    <ul>{sections}</ul>
                </div>
            </section>
        </div>
    }
}

/// Tags for a list, or a single "Not set" line when it is empty.
#[component]
pub fn TagList(#[prop(into)] items: Signal<Vec<String>>, #[prop(default = "tag tag--blue")] tag_class: &'static str) -> impl IntoView {
    move || {
        let items = items.get();
        if items.is_empty() {
            view! { <p class="muted">{NOT_SET}</p> }.into_any()
        } else {
            view! {
                <div class="tag-list">
                    {items.into_iter().map(|item| view! { <span class=tag_class>{item}</span> }).collect_view()}
                </div>
            }
            .into_any()
        }
    }
}

/// Reactive display text for one profile value, "Not set" when blank.
pub(crate) fn shown(
    profile: RwSignal<ProfileRecord>,
    get: fn(&ProfileRecord) -> &str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || profile.with(|p| display_or_not_set(get(p)).to_owned())
}

#[component]
pub fn DriverHomeTab(profile: RwSignal<ProfileRecord>, on_edit: Callback<()>) -> impl IntoView {
    let languages = Signal::derive(move || profile.with(|p| p.personal_info.languages.clone()));
    let certificates = Signal::derive(move || profile.with(|p| p.personal_info.certificates.clone()));

    view! {
        <div class="home-tab home-tab--driver">
            <section class="card driver-card">
                <Avatar profile=profile class_name="driver-card__avatar"/>
                <div>
                    <h2>{move || profile.with(|p| p.name.clone())}</h2>
                    <p class="muted">"Driver Account"</p>
                    <p>{move || profile.with(|p| p.email.clone())}</p>
                    <p>{shown(profile, |p| &p.phone)}</p>
                    <p>{shown(profile, ProfileRecord::license_number)}</p>
                </div>
            </section>
            <div class="home-tab__grid">
                <section class="card">
                    <div class="card__header">
                        <h3>"Personal Information"</h3>
                        <button class="btn btn--primary" on:click=move |_| on_edit.run(())>
                            "Edit Personal Info"
                        </button>
                    </div>
                    <dl class="detail-list">
                        <dt>"Date of Birth:"</dt>
                        <dd>{shown(profile, |p| &p.personal_info.date_of_birth)}</dd>
                        <dt>"Blood Group:"</dt>
                        <dd>{shown(profile, |p| &p.personal_info.blood_group)}</dd>
                        <dt>"Address:"</dt>
                        <dd>{shown(profile, |p| &p.address)}</dd>
                        <dt>"Emergency Contact:"</dt>
                        <dd>{shown(profile, |p| &p.personal_info.emergency_contact.name)}</dd>
                        <dt>"Operating Area:"</dt>
                        <dd>{NOT_SET}</dd>
                    </dl>
                </section>
                <section class="card">
                    <h3>"Languages & Certifications"</h3>
                    <h4>"Languages:"</h4>
                    <TagList items=languages/>
                    <h4>"Certifications:"</h4>
                    <TagList items=certificates tag_class="tag tag--green"/>
                </section>
            </div>
        </div>
    }
}
