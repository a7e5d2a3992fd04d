//! Origin/destination inputs and the route summary for the map screen.
//! Both inputs offer place suggestions once the maps script is loaded.

use leptos::prelude::*;

use crate::state::route::{ROUTE_FAILED_MESSAGE, RouteQuery};
use crate::util::maps::Directions;

/// Blocking alert shown when the directions provider fails.
fn alert_route_failed() {
    #[cfg(feature = "csr")]
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(ROUTE_FAILED_MESSAGE).is_err() {
            log::warn!("failed to show route alert");
        }
    }
    #[cfg(not(feature = "csr"))]
    log::warn!("{ROUTE_FAILED_MESSAGE}");
}

#[component]
pub fn MapControls(query: RwSignal<RouteQuery<Directions>, LocalStorage>) -> impl IntoView {
    let busy = RwSignal::new(false);
    let origin_input = NodeRef::<leptos::html::Input>::new();
    let destination_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    {
        use crate::config::AppConfig;
        use crate::util::maps::{PlaceAutocomplete, ensure_loaded};

        let config = expect_context::<AppConfig>();
        let suggestions = StoredValue::new_local(Vec::<PlaceAutocomplete>::new());

        Effect::new(move || {
            let (Some(origin), Some(destination)) = (origin_input.get(), destination_input.get()) else {
                return;
            };
            if suggestions.with_value(|s| !s.is_empty()) {
                return;
            }
            let api_key = config.maps_api_key.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = ensure_loaded(&api_key).await {
                    log::warn!("place suggestions unavailable: {e}");
                    return;
                }
                let pickup = PlaceAutocomplete::attach(&origin, move |text| query.update(|q| q.origin = text));
                let drop_off =
                    PlaceAutocomplete::attach(&destination, move |text| query.update(|q| q.destination = text));
                suggestions.set_value(vec![pickup, drop_off]);
            });
        });
    }

    let on_calculate = move |_| {
        if busy.get_untracked() {
            return;
        }
        // Blank endpoints make this a no-op.
        let Some(request) = query.with_untracked(RouteQuery::request) else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match crate::util::maps::request_route(&request).await {
                Ok(summary) => query.update(|q| q.apply_success(summary)),
                Err(e) => {
                    log::warn!("route request failed: {e}");
                    alert_route_failed();
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="map-controls card">
            <label class="form-field">
                <span class="form-label">"Pickup"</span>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Enter pickup location"
                    node_ref=origin_input
                    prop:value=move || query.with(|q| q.origin.clone())
                    on:input=move |ev| query.update(|q| q.origin = event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-label">"Destination"</span>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Enter destination"
                    node_ref=destination_input
                    prop:value=move || query.with(|q| q.destination.clone())
                    on:input=move |ev| query.update(|q| q.destination = event_target_value(&ev))
                />
            </label>
            <div class="map-controls__actions">
                <button class="btn btn--primary" on:click=on_calculate disabled=move || busy.get()>
                    "Calculate Route"
                </button>
                <button class="btn" on:click=move |_| query.update(RouteQuery::clear)>
                    "Clear"
                </button>
            </div>
            {move || {
                query
                    .with(|q| q.distance_text().zip(q.duration_text()).map(|(d, t)| (d.to_owned(), t.to_owned())))
                    .map(|(distance, duration)| {
                        view! {
                            <dl class="map-controls__summary">
                                <dt>"Distance"</dt>
                                <dd>{distance}</dd>
                                <dt>"Duration"</dt>
                                <dd>{duration}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
