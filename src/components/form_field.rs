//! Labelled form inputs with inline validation errors.
//!
//! Inputs own no state: the page passes the current value and a callback.
//! Editing an input clears that field's error, matching how the forms behave
//! between submit attempts.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::state::registration::{Field, FieldErrors};

pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--error" } else { "form-input" }
}

pub(crate) fn check_class(has_error: bool) -> &'static str {
    if has_error { "form-check form-check--error" } else { "form-check" }
}

/// Input id of the first field with an error, in form order.
pub(crate) fn first_invalid_id(errors: &FieldErrors) -> Option<&'static str> {
    errors.fields().next().map(Field::key)
}

/// Move keyboard focus to the first rejected input after a failed submit.
pub(crate) fn focus_first_invalid(errors: &FieldErrors) {
    let Some(id) = first_invalid_id(errors) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .map(|e| e.unchecked_into::<web_sys::HtmlElement>());
        if element.is_some_and(|e| e.focus().is_err()) {
            log::debug!("could not focus #{id}");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("first invalid field: {id}");
}

#[component]
pub fn TextField(
    label: &'static str,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let id = field.key();
    let message = move || errors.with(|e| e.message(field).map(str::to_owned));

    view! {
        <div class="form-field">
            <label class="form-label" for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                class=move || input_class(errors.with(|e| e.contains(field)))
                prop:value=move || value.get()
                on:input=move |ev| {
                    errors.update(|e| e.clear(field));
                    on_input.run(event_target_value(&ev));
                }
            />
            {move || message().map(|m| view! { <p class="form-error">{m}</p> })}
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    field: Field,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let id = field.key();
    view! {
        <label class=move || check_class(errors.with(|e| e.contains(field))) for=id>
            <input
                id=id
                name=id
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    errors.update(|e| e.clear(field));
                    on_change.run(event_target_checked(&ev));
                }
            />
            <span>{label}</span>
        </label>
    }
}
