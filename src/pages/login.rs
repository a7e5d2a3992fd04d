//! Sign-in pages for riders and drivers.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login mirrors the returned user into the session (see
//! `net::api::login`) and moves on to the persona's landing route. Failures
//! keep the form as typed and show the banner. A notice left by the last
//! page (such as a logout) opens in the banner.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::banner::{Banner, BannerMessage};
use crate::components::form_field::{TextField, focus_first_invalid};
use crate::config::AppConfig;
use crate::net::api::{self, LOGIN_FAILED_MESSAGE};
use crate::state::login::LoginDraft;
use crate::state::persona::Persona;
use crate::state::registration::{Field, FieldErrors};

fn title(persona: Persona) -> &'static str {
    match persona {
        Persona::Rider => "User Login",
        Persona::Driver => "Driver Login",
    }
}

#[component]
pub fn LoginPage(persona: Persona) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let draft = RwSignal::new(LoginDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(session.take_notice().map(|notice| BannerMessage::success(notice, None)));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(LoginDraft::prepare_submission) {
            Ok(request) => request,
            Err(invalid) => {
                focus_first_invalid(&invalid);
                errors.set(invalid);
                return;
            }
        };
        busy.set(true);
        banner.set(None);

        let config = config.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&config, &session, persona, &request).await {
                Ok(_) => navigate(persona.home_path(), NavigateOptions::default()),
                Err(e) => {
                    log::warn!("login failed: {e}");
                    banner.set(Some(BannerMessage::error(e.user_message(LOGIN_FAILED_MESSAGE))));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{title(persona)}</h1>
                <p class="auth-card__subtitle">"Welcome back! Sign in to your account"</p>
                <Banner message=banner/>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        field=Field::Email
                        input_type="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || draft.with(|d| d.email.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                        errors=errors
                    />
                    <TextField
                        label="Password"
                        field=Field::Password
                        input_type="password"
                        value=Signal::derive(move || draft.with(|d| d.password.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.password = v))
                        errors=errors
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=persona.register_path()>"Register here"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn RiderLoginPage() -> impl IntoView {
    view! { <LoginPage persona=Persona::Rider/> }
}

#[component]
pub fn DriverLoginPage() -> impl IntoView {
    view! { <LoginPage persona=Persona::Driver/> }
}
