//! Driver vehicles tab with an inline "add vehicle" form.

use leptos::prelude::*;

use crate::state::vehicles::{Vehicle, VehicleDraft, add_vehicle};

#[component]
pub fn VehiclesTab() -> impl IntoView {
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let draft = RwSignal::new(VehicleDraft::default());
    let adding = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = draft
            .with_untracked(VehicleDraft::validate)
            .and_then(|vehicle| {
                let mut added = Ok(());
                vehicles.update(|list| added = add_vehicle(list, vehicle));
                added
            });
        match outcome {
            Ok(()) => {
                draft.set(VehicleDraft::default());
                error.set(None);
                adding.set(false);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let input = move |label: &'static str, get: fn(&VehicleDraft) -> &String, set: fn(&mut VehicleDraft, String)| {
        view! {
            <label class="form-field">
                <span class="form-label">{label}</span>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| {
                        error.set(None);
                        draft.update(|d| set(d, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    view! {
        <section class="card vehicles-tab">
            <div class="card__header">
                <h2>"Vehicles"</h2>
                <button class="btn btn--primary" on:click=move |_| adding.update(|a| *a = !*a)>
                    "Add Vehicle"
                </button>
            </div>

            <Show when=move || adding.get()>
                <form class="vehicle-form" on:submit=on_submit>
                    {input("Make", |d| &d.make, |d, v| d.make = v)}
                    {input("Model", |d| &d.model, |d, v| d.model = v)}
                    {input("Registration Number", |d| &d.plate, |d, v| d.plate = v)}
                    {move || error.get().map(|m| view! { <p class="form-error">{m}</p> })}
                    <button class="btn btn--primary" type="submit">"Save Vehicle"</button>
                </form>
            </Show>

            <Show
                when=move || vehicles.with(|v| !v.is_empty())
                fallback=|| view! { <p class="muted">"No vehicles added yet."</p> }
            >
                <ul class="vehicle-list">
                    <For
                        each=move || vehicles.get()
                        key=|v| v.plate.clone()
                        children=|v| {
                            view! {
                                <li class="vehicle-list__item">
                                    <span class="vehicle-list__title">{v.title()}</span>
                                    <span class="vehicle-list__plate">{v.plate}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
