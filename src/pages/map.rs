//! Trip planner: route inputs beside the map widget.

use leptos::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::map_area::MapArea;
use crate::components::map_controls::MapControls;
use crate::state::route::RouteQuery;
use crate::util::maps::Directions;

#[component]
pub fn MapPage() -> impl IntoView {
    let query = RwSignal::new_local(RouteQuery::<Directions>::default());

    view! {
        <SiteHeader/>
        <main class="map-page">
            <MapControls query=query/>
            <MapArea query=query/>
        </main>
    }
}
