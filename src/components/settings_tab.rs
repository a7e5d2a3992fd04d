//! Account settings panels: sign-in and security, privacy preferences, and
//! local data management. Riders see each as its own tab; drivers get all
//! three on one settings tab.

#[cfg(test)]
#[path = "settings_tab_test.rs"]
mod settings_tab_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::UserRecord;
use crate::state::preferences::{Preference, PrivacyPreferences};
use crate::state::profile::{ProfileRecord, display_or_not_set};

/// Pretty JSON export of the stored user record.
pub(crate) fn export_json(user: &UserRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(user)
}

/// `data:` URL that downloads `json` as a file.
pub(crate) fn json_data_url(json: &str) -> String {
    #[cfg(feature = "csr")]
    let encoded = String::from(js_sys::encode_uri_component(json));
    #[cfg(not(feature = "csr"))]
    let encoded = json.to_owned();
    format!("data:application/json;charset=utf-8,{encoded}")
}

#[component]
pub fn SecurityPanel(profile: RwSignal<ProfileRecord>) -> impl IntoView {
    view! {
        <section class="card settings-panel">
            <h2>"Sign-in & Security"</h2>
            <dl class="detail-list">
                <dt>"Sign-in email"</dt>
                <dd>{move || profile.with(|p| display_or_not_set(&p.email).to_owned())}</dd>
                <dt>"Password"</dt>
                <dd>"••••••••"</dd>
            </dl>
            <p class="muted">
                "Passwords need at least 8 characters with an uppercase letter, a lowercase letter, and a number."
            </p>
        </section>
    }
}

#[component]
pub fn PrivacyPanel() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let prefs = RwSignal::new(PrivacyPreferences::load(session.store()));

    let rows = Preference::ALL
        .into_iter()
        .map(|pref| {
            let session = session.clone();
            view! {
                <label class="toggle-row">
                    <span>{pref.label()}</span>
                    <input
                        type="checkbox"
                        prop:checked=move || prefs.with(|p| p.get(pref))
                        on:change=move |ev| {
                            prefs.update(|p| p.set(pref, event_target_checked(&ev)));
                            if let Err(e) = prefs.get_untracked().save(session.store()) {
                                log::warn!("failed to save privacy preferences: {e}");
                            }
                        }
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <section class="card settings-panel">
            <h2>"Privacy"</h2>
            {rows}
        </section>
    }
}

#[component]
pub fn DataPanel(on_clear: Callback<()>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let download = move || {
        session
            .current_user()
            .and_then(|user| match export_json(&user) {
                Ok(json) => Some(json_data_url(&json)),
                Err(e) => {
                    log::warn!("failed to export profile: {e}");
                    None
                }
            })
    };

    view! {
        <section class="card settings-panel">
            <h2>"Data Management"</h2>
            <p>"Download the profile data stored in this browser, or remove it and sign out."</p>
            <div class="settings-panel__actions">
                {move || {
                    download()
                        .map(|href| {
                            view! {
                                <a class="btn btn--outline" href=href download="gokeral-profile.json">
                                    "Download my data"
                                </a>
                            }
                        })
                }}
                <button class="btn btn--danger" on:click=move |_| on_clear.run(())>
                    "Clear local data"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn DriverSettingsTab(profile: RwSignal<ProfileRecord>, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="settings-tab">
            <SecurityPanel profile=profile/>
            <PrivacyPanel/>
            <DataPanel on_clear=on_clear/>
        </div>
    }
}
