//! Profile sidebar: identity block, tab menu, optional logout.
//!
//! DESIGN
//! ======
//! Generic over the persona's [`TabSet`], so the rider and driver layouts
//! share one menu. Visibility comes from the page's [`ProfileChrome`]; on
//! narrow viewports an overlay covers the content and closes the menu when
//! clicked.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::profile::ProfileRecord;
use crate::state::tabs::{ProfileChrome, TabSet};

pub(crate) fn sidebar_class(open: bool) -> &'static str {
    if open { "sidebar sidebar--open" } else { "sidebar sidebar--closed" }
}

pub(crate) fn menu_item_class(active: bool) -> &'static str {
    if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

/// Avatar fallback: the first letter of the name, upper-cased.
pub(crate) fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn Avatar(profile: RwSignal<ProfileRecord>, #[prop(default = "avatar")] class_name: &'static str) -> impl IntoView {
    move || {
        profile.with(|p| match p.profile_image() {
            Some(src) => view! { <img class=class_name src=src.to_owned() alt="Profile"/> }.into_any(),
            None => view! {
                <div class=format!("{class_name} {class_name}--initial")>{avatar_initial(&p.name)}</div>
            }
            .into_any(),
        })
    }
}

#[component]
pub fn Sidebar<T>(
    chrome: RwSignal<ProfileChrome<T>>,
    profile: RwSignal<ProfileRecord>,
    #[prop(optional)] on_logout: Option<Callback<()>>,
) -> impl IntoView
where
    T: TabSet,
{
    let persona_label = move || profile.with(|p| p.persona.persona().account_label());

    let items = T::ALL
        .iter()
        .copied()
        .map(|tab| {
            view! {
                <li>
                    <button
                        class=move || menu_item_class(chrome.with(|c| c.tabs.is_active(tab)))
                        data-tab=tab.key()
                        on:click=move |_| chrome.update(|c| c.select_tab(tab))
                    >
                        {tab.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <Show when=move || chrome.with(|c| c.shell.shows_overlay())>
            <div class="sidebar-overlay" on:click=move |_| chrome.update(|c| c.shell.close())></div>
        </Show>
        <aside class=move || sidebar_class(chrome.with(|c| c.shell.is_open()))>
            <div class="sidebar__identity">
                <Avatar profile=profile class_name="sidebar__avatar"/>
                <p class="sidebar__name">{move || profile.with(|p| p.name.clone())}</p>
                <p class="sidebar__email">{move || profile.with(|p| p.email.clone())}</p>
                <p class="sidebar__persona">{persona_label}</p>
            </div>
            <ul class="sidebar__menu">{items}</ul>
            {on_logout.map(|cb| {
                view! {
                    <button class="sidebar__logout" on:click=move |_| cb.run(())>
                        "Logout"
                    </button>
                }
            })}
        </aside>
    }
}
