//! Map widget host. Loads the provider script once, mounts the map on its
//! container, and redraws the directions overlay whenever the route changes.

use leptos::prelude::*;

use crate::state::route::RouteQuery;
use crate::util::maps::Directions;

#[component]
pub fn MapArea(query: RwSignal<RouteQuery<Directions>, LocalStorage>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::config::AppConfig;
        use crate::util::maps::{MapHandle, MapOptions, ensure_loaded};

        let config = expect_context::<AppConfig>();
        let handle = Rc::new(RefCell::new(None::<MapHandle>));

        let mount_slot = Rc::clone(&handle);
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            if mount_slot.borrow().is_some() {
                return;
            }
            let slot = Rc::clone(&mount_slot);
            let api_key = config.maps_api_key.clone();
            let options = MapOptions::new(config.map_center, config.map_zoom);
            leptos::task::spawn_local(async move {
                match ensure_loaded(&api_key).await {
                    Ok(()) => {
                        let map = MapHandle::mount(&el, &options);
                        query.with_untracked(|q| map.show(q.directions()));
                        *slot.borrow_mut() = Some(map);
                    }
                    Err(e) => log::warn!("map unavailable: {e}"),
                }
                loading.set(false);
            });
        });

        Effect::new(move || {
            query.with(|q| {
                if let Some(map) = handle.borrow().as_ref() {
                    map.show(q.directions());
                }
            });
        });
    }

    view! {
        <div class="map-area">
            <Show when=move || loading.get()>
                <p class="map-area__loading">"Loading Google Maps..."</p>
            </Show>
            <div class="map-area__canvas" node_ref=container></div>
        </div>
    }
}
