//! Dismissable success/error banner shared by forms and profile pages.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerMessage {
    pub kind: BannerKind,
    pub title: String,
    pub detail: Option<String>,
}

impl BannerMessage {
    pub fn error(title: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, title: title.into(), detail: None }
    }

    pub fn success(title: impl Into<String>, detail: Option<&str>) -> Self {
        Self { kind: BannerKind::Success, title: title.into(), detail: detail.map(str::to_owned) }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "banner banner--success",
            BannerKind::Error => "banner banner--error",
        }
    }
}

/// Renders `message` while it is `Some`; the close button clears it.
#[component]
pub fn Banner(message: RwSignal<Option<BannerMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let detail = m.detail.clone().map(|d| view! { <p class="banner__detail">{d}</p> });
            view! {
                <div class=m.class() role="alert">
                    <div class="banner__body">
                        <p class="banner__title">{m.title.clone()}</p>
                        {detail}
                    </div>
                    <button class="banner__close" aria-label="Dismiss" on:click=move |_| message.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
