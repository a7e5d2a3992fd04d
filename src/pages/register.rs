//! Registration pages for riders and drivers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a [`RegistrationDraft`] and its [`FieldErrors`]. Submit
//! validates everything at once; only a clean draft yields a payload, which
//! goes to the persona's register endpoint. On success the banner announces
//! the redirect and the page moves to the login route after the configured
//! delay.
//!
//! Driver files stay in the browser as `File` handles keyed by their
//! multipart field name; the draft only records their name and MIME type.
//! Image previews are object URLs, revoked on remove, replace, and unmount.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::{Banner, BannerMessage};
use crate::components::form_field::{CheckboxField, TextField, focus_first_invalid, input_class};
use crate::config::AppConfig;
use crate::net::api::{self, Attachment, REGISTRATION_FAILED_MESSAGE};
use crate::state::persona::Persona;
use crate::state::profile::BLOOD_GROUPS;
use crate::state::registration::{Field, FieldErrors, FileMeta, RegistrationDraft, RegistrationPayload};
use crate::util::{dates, geolocation};

type Previews = RwSignal<BTreeMap<Field, String>>;
type Attachments = StoredValue<BTreeMap<&'static str, Attachment>, LocalStorage>;

pub(crate) const SUCCESS_TITLE: &str = "Registration successful!";
pub(crate) const SUCCESS_DETAIL: &str = "Redirecting to login...";

pub(crate) fn heading(persona: Persona) -> &'static str {
    match persona {
        Persona::Rider => "Create Your Account",
        Persona::Driver => "Driver Registration",
    }
}

/// Whether a picked file gets an inline preview. The profile photo always
/// does; the certificate only when it is an image.
pub(crate) fn wants_preview(field: Field, file: &FileMeta) -> bool {
    match field {
        Field::ProfileImage => true,
        Field::CertificateOfDriving => file.is_image(),
        _ => false,
    }
}

fn revoke_url(url: &str) {
    #[cfg(feature = "csr")]
    if web_sys::Url::revoke_object_url(url).is_err() {
        log::warn!("failed to revoke preview url");
    }
    #[cfg(not(feature = "csr"))]
    let _ = url;
}

fn drop_preview(previews: Previews, field: Field) {
    let mut removed = None;
    previews.update(|p| removed = p.remove(&field));
    if let Some(url) = removed {
        revoke_url(&url);
    }
}

fn text_input(
    draft: RwSignal<RegistrationDraft>,
    errors: RwSignal<FieldErrors>,
    label: &'static str,
    field: Field,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <TextField
            label=label
            field=field
            input_type=input_type
            value=Signal::derive(move || draft.with(|d| d.text(field).to_owned()))
            on_input=Callback::new(move |v| draft.update(|d| d.set_text(field, v)))
            errors=errors
        />
    }
}

fn checkbox(draft: RwSignal<RegistrationDraft>, errors: RwSignal<FieldErrors>, label: &'static str, field: Field) -> impl IntoView {
    view! {
        <CheckboxField
            label=label
            field=field
            checked=Signal::derive(move || draft.with(|d| d.flag(field)))
            on_change=Callback::new(move |checked| draft.update(|d| d.set_flag(field, checked)))
            errors=errors
        />
    }
}

#[component]
fn BloodGroupSelect(draft: RwSignal<RegistrationDraft>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let field = Field::BloodGroup;
    let options = BLOOD_GROUPS
        .into_iter()
        .map(|group| view! { <option value=group>{group}</option> })
        .collect_view();
    view! {
        <div class="form-field">
            <label class="form-label" for=field.key()>"Blood Group"</label>
            <select
                id=field.key()
                class=move || input_class(errors.with(|e| e.contains(field)))
                prop:value=move || draft.with(|d| d.text(field).to_owned())
                on:change=move |ev| {
                    errors.update(|e| e.clear(field));
                    draft.update(|d| d.set_text(field, event_target_value(&ev)));
                }
            >
                <option value="">"Select blood group"</option>
                {options}
            </select>
            {move || errors.with(|e| e.message(field).map(str::to_owned)).map(|m| view! { <p class="form-error">{m}</p> })}
        </div>
    }
}

#[component]
fn FileField(
    label: &'static str,
    field: Field,
    accept: &'static str,
    draft: RwSignal<RegistrationDraft>,
    errors: RwSignal<FieldErrors>,
    previews: Previews,
    attachments: Attachments,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |ev: leptos::ev::Event| {
        errors.update(|e| e.clear(field));
        drop_preview(previews, field);
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                attachments.update_value(|m| {
                    m.remove(field.key());
                });
                draft.update(|d| d.set_file(field, None));
                return;
            };
            let meta = FileMeta { name: file.name(), mime_type: file.type_() };
            if wants_preview(field, &meta) {
                match web_sys::Url::create_object_url_with_blob(&file) {
                    Ok(url) => previews.update(|p| {
                        p.insert(field, url);
                    }),
                    Err(_) => log::warn!("failed to create preview for {}", field.key()),
                }
            }
            attachments.update_value(|m| {
                m.insert(field.key(), file);
            });
            draft.update(|d| d.set_file(field, Some(meta)));
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, attachments);
    };

    let on_remove = move |_| {
        drop_preview(previews, field);
        attachments.update_value(|m| {
            m.remove(field.key());
        });
        draft.update(|d| d.set_file(field, None));
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let picked = move || draft.with(|d| d.file(field).map(|f| f.name.clone()));

    view! {
        <div class="form-field form-field--file">
            <label class="form-label" for=field.key()>{label}</label>
            <input
                id=field.key()
                name=field.key()
                type="file"
                accept=accept
                class=move || input_class(errors.with(|e| e.contains(field)))
                node_ref=input_ref
                on:change=on_change
            />
            {move || {
                picked()
                    .map(|name| {
                        view! {
                            <div class="file-preview">
                                {move || {
                                    previews
                                        .with(|p| p.get(&field).cloned())
                                        .map(|src| view! { <img class="file-preview__image" src=src alt=label/> })
                                }}
                                <span class="file-preview__name">{name}</span>
                                <button class="btn btn--small" type="button" on:click=on_remove>
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}
            {move || errors.with(|e| e.message(field).map(str::to_owned)).map(|m| view! { <p class="form-error">{m}</p> })}
        </div>
    }
}

#[component]
pub fn RegistrationPage(persona: Persona) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let draft = RwSignal::new(RegistrationDraft::empty(persona));
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<BannerMessage>);
    let busy = RwSignal::new(false);
    let locating = RwSignal::new(false);
    let previews: Previews = RwSignal::new(BTreeMap::new());
    let attachments: Attachments = StoredValue::new_local(BTreeMap::new());

    on_cleanup(move || {
        previews.try_with_untracked(|p| p.values().for_each(|url| revoke_url(url)));
    });

    let on_locate = move |_| {
        locating.set(true);
        geolocation::current_position(move |outcome| {
            locating.set(false);
            match outcome {
                Ok(point) => {
                    draft.update(|d| {
                        d.set_text(Field::Latitude, geolocation::coordinate_text(point.lat));
                        d.set_text(Field::Longitude, geolocation::coordinate_text(point.long));
                    });
                    errors.update(|e| {
                        e.clear(Field::Latitude);
                        e.clear(Field::Longitude);
                    });
                }
                Err(e) => {
                    log::warn!("geolocation failed: {e}");
                    banner.set(Some(BannerMessage::error(e.to_string())));
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(|d| d.prepare_submission(dates::today())) {
            Ok(payload) => payload,
            Err(invalid) => {
                focus_first_invalid(&invalid);
                errors.set(invalid);
                return;
            }
        };
        busy.set(true);
        banner.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match &payload {
                RegistrationPayload::Rider(body) => api::user_register(&config, body).await,
                RegistrationPayload::Driver(body) => {
                    api::driver_register(&config, body, |name| attachments.with_value(|m| m.get(name).cloned())).await
                }
            };
            match outcome {
                Ok(()) => {
                    banner.set(Some(BannerMessage::success(SUCCESS_TITLE, Some(SUCCESS_DETAIL))));
                    #[cfg(feature = "csr")]
                    gloo_timers::future::sleep(std::time::Duration::from_millis(config.redirect_delay_ms)).await;
                    navigate(persona.login_path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    banner.set(Some(BannerMessage::error(e.user_message(REGISTRATION_FAILED_MESSAGE))));
                    busy.set(false);
                }
            }
        });
    };

    let persona_fields = match persona {
        Persona::Driver => view! {
            {text_input(draft, errors, "Driving License Number", Field::DrivingLicenseNo, "text")}
            {text_input(draft, errors, "Address", Field::DriverAddress, "text")}
            {text_input(draft, errors, "Driving Experience (years)", Field::DriverExperience, "number")}
            <BloodGroupSelect draft=draft errors=errors/>
            {text_input(draft, errors, "Date of Birth", Field::DateOfBirth, "date")}
            {text_input(draft, errors, "Emergency Contact Number", Field::EmergencyContact, "tel")}
            {text_input(draft, errors, "Languages Known (comma separated)", Field::Languages, "text")}
            <FileField
                label="Profile Image"
                field=Field::ProfileImage
                accept="image/*"
                draft=draft
                errors=errors
                previews=previews
                attachments=attachments
            />
            <FileField
                label="Certificate of Driving"
                field=Field::CertificateOfDriving
                accept="image/*,.pdf"
                draft=draft
                errors=errors
                previews=previews
                attachments=attachments
            />
        }
        .into_any(),
        Persona::Rider => view! {
            {text_input(draft, errors, "Address", Field::Address, "text")}
            <div class="form-row">
                {text_input(draft, errors, "Latitude", Field::Latitude, "text")}
                {text_input(draft, errors, "Longitude", Field::Longitude, "text")}
            </div>
            <button class="btn btn--outline" type="button" on:click=on_locate disabled=move || locating.get()>
                {move || if locating.get() { "Locating..." } else { "Use current location" }}
            </button>
            {checkbox(draft, errors, "I agree to the privacy policy", Field::PrivacyAgreement)}
        }
        .into_any(),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>{heading(persona)}</h1>
                <Banner message=banner/>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {text_input(draft, errors, "Full Name", Field::Name, "text")}
                    {text_input(draft, errors, "Email", Field::Email, "email")}
                    {text_input(draft, errors, "Phone Number", Field::Phone, "tel")}
                    {text_input(draft, errors, "Password", Field::Password, "password")}
                    {text_input(draft, errors, "Confirm Password", Field::ConfirmPassword, "password")}
                    {persona_fields}
                    {checkbox(draft, errors, "I agree to the terms and conditions", Field::Agreement)}
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=persona.login_path()>"Sign in"</a>
                </p>
                <a class="auth-card__back" href="/">"Back to Home"</a>
            </div>
        </div>
    }
}

#[component]
pub fn RiderRegisterPage() -> impl IntoView {
    view! { <RegistrationPage persona=Persona::Rider/> }
}

#[component]
pub fn DriverRegisterPage() -> impl IntoView {
    view! { <RegistrationPage persona=Persona::Driver/> }
}
