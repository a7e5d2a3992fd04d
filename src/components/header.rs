//! Page headers: the profile header with menu toggle and logout, and the
//! site header used on the map screen.

use leptos::prelude::*;

use crate::state::persona::Persona;
use crate::state::profile::ProfileRecord;

#[component]
pub fn ProfileHeader(
    title: &'static str,
    profile: RwSignal<ProfileRecord>,
    on_toggle_menu: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="profile-header">
            <button class="profile-header__menu" aria-label="Toggle menu" on:click=move |_| on_toggle_menu.run(())>
                "☰"
            </button>
            <h1 class="profile-header__title">{title}</h1>
            <div class="profile-header__user">
                <span class="profile-header__name">{move || profile.with(|p| p.name.clone())}</span>
                <button class="btn btn--outline" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Gokeral"</a>
            <button
                class="site-header__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class=move || if menu_open.get() { "site-header__nav site-header__nav--open" } else { "site-header__nav" }>
                <a href="/">"Home"</a>
                <a href="/map">"Plan a Ride"</a>
                <a href=Persona::Rider.profile_path()>"My Profile"</a>
            </nav>
        </header>
    }
}
