//! Google Maps JS bindings: script loading, map widget, directions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map page never talks to `google.maps` directly. It mounts a
//! [`MapHandle`] on a container element, asks [`request_route`] for
//! directions, and hands the opaque [`Directions`] value back to the handle
//! for rendering. The pickup and destination inputs get a
//! [`PlaceAutocomplete`] each, which reports the chosen suggestion as plain
//! text. Natively, every entry point reports the provider as
//! unavailable so pure route logic can be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures come back as [`RouteError`]; script load problems are
//! [`MapsError`] and only logged, leaving an empty map area.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

use crate::state::route::{RouteError, RouteRequest, RouteSummary};

/// The provider's full directions result, rendered by the map widget.
#[cfg(feature = "csr")]
pub type Directions = wasm_bindgen::JsValue;
#[cfg(not(feature = "csr"))]
pub type Directions = ();

pub const SCRIPT_ELEMENT_ID: &str = "google-maps-script";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapsError {
    #[error("no browser document")]
    NoDocument,
    #[error("failed to load the maps script")]
    ScriptLoad,
    #[error("maps are not available outside the browser")]
    Unavailable,
}

/// Map widget options. All built-in controls start hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOptions {
    pub center: (f64, f64),
    pub zoom: u8,
    pub zoom_control: bool,
    pub street_view_control: bool,
    pub map_type_control: bool,
    pub fullscreen_control: bool,
}

impl MapOptions {
    #[must_use]
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom,
            zoom_control: false,
            street_view_control: false,
            map_type_control: false,
            fullscreen_control: false,
        }
    }
}

/// Loader URL for the Maps JS API with the `places` library.
#[must_use]
pub fn script_url(api_key: &str) -> String {
    let key: String = api_key
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    format!("https://maps.googleapis.com/maps/api/js?key={key}&libraries=places")
}

/// Distance and duration text of a route's first leg.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegText {
    pub distance: String,
    pub duration: String,
}

/// Summarize a provider answer from its first route's first leg.
///
/// # Errors
///
/// Returns [`RouteError::NoLeg`] when the answer has no leg.
pub fn summarize<D>(leg: Option<LegText>, directions: D) -> Result<RouteSummary<D>, RouteError> {
    let leg = leg.ok_or(RouteError::NoLeg)?;
    Ok(RouteSummary { distance_text: leg.distance, duration_text: leg.duration, directions })
}

/// Text for a picked suggestion: the formatted address, else the place name,
/// else what the user typed.
#[must_use]
pub fn place_text(formatted_address: Option<&str>, name: Option<&str>, typed: &str) -> String {
    [formatted_address, name, Some(typed)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
        .to_owned()
}

#[cfg(feature = "csr")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
        pub type Map;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
        pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Map;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type DirectionsService;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
        pub fn new() -> DirectionsService;

        #[wasm_bindgen(method)]
        pub fn route(this: &DirectionsService, request: &JsValue) -> js_sys::Promise;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type DirectionsRenderer;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
        pub fn new() -> DirectionsRenderer;

        #[wasm_bindgen(method, js_name = setMap)]
        pub fn set_map(this: &DirectionsRenderer, map: &Map);

        #[wasm_bindgen(method, js_name = setDirections)]
        pub fn set_directions(this: &DirectionsRenderer, directions: &JsValue);

        #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
        #[derive(Clone)]
        pub type Autocomplete;

        #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
        pub fn new(input: &web_sys::HtmlInputElement) -> Autocomplete;

        #[wasm_bindgen(method, js_name = getPlace)]
        pub fn get_place(this: &Autocomplete) -> JsValue;

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &Autocomplete, event: &str, handler: &js_sys::Function) -> MapsEventListener;

        #[wasm_bindgen(js_namespace = ["google", "maps"])]
        pub type MapsEventListener;

        #[wasm_bindgen(method)]
        pub fn remove(this: &MapsEventListener);
    }
}

#[cfg(feature = "csr")]
fn js_object(entries: &[(&str, wasm_bindgen::JsValue)]) -> wasm_bindgen::JsValue {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        if js_sys::Reflect::set(&object, &(*key).into(), value).is_err() {
            log::warn!("failed to set {key} on maps options");
        }
    }
    object.into()
}

#[cfg(feature = "csr")]
fn prop(target: &wasm_bindgen::JsValue, key: &str) -> Option<wasm_bindgen::JsValue> {
    js_sys::Reflect::get(target, &key.into()).ok().filter(|v| !v.is_undefined() && !v.is_null())
}

#[cfg(feature = "csr")]
fn first(target: &wasm_bindgen::JsValue) -> Option<wasm_bindgen::JsValue> {
    js_sys::Reflect::get_u32(target, 0).ok().filter(|v| !v.is_undefined() && !v.is_null())
}

#[cfg(feature = "csr")]
fn first_leg(directions: &wasm_bindgen::JsValue) -> Option<LegText> {
    let leg = prop(directions, "routes")
        .and_then(|routes| first(&routes))
        .and_then(|route| prop(&route, "legs"))
        .and_then(|legs| first(&legs))?;
    let text = |key: &str| prop(&leg, key).and_then(|v| prop(&v, "text")).and_then(|v| v.as_string()).unwrap_or_default();
    Some(LegText { distance: text("distance"), duration: text("duration") })
}

#[cfg(feature = "csr")]
fn maps_loaded() -> bool {
    web_sys::window()
        .and_then(|w| prop(&w.into(), "google"))
        .and_then(|g| prop(&g, "maps"))
        .is_some()
}

/// Make sure the Maps JS API is loaded, inserting the script tag once.
///
/// # Errors
///
/// Returns [`MapsError`] when there is no document or the script fails to load.
pub async fn ensure_loaded(api_key: &str) -> Result<(), MapsError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        if maps_loaded() {
            return Ok(());
        }
        let document = web_sys::window().and_then(|w| w.document()).ok_or(MapsError::NoDocument)?;
        let existing = document.get_element_by_id(SCRIPT_ELEMENT_ID);
        let script = match &existing {
            Some(el) => el.clone(),
            None => {
                let el = document.create_element("script").map_err(|_| MapsError::NoDocument)?;
                let script: &web_sys::HtmlScriptElement = el.unchecked_ref();
                script.set_id(SCRIPT_ELEMENT_ID);
                script.set_src(&script_url(api_key));
                script.set_async(true);
                el
            }
        };

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            if script.add_event_listener_with_callback("load", &resolve).is_err()
                || script.add_event_listener_with_callback("error", &reject).is_err()
            {
                log::warn!("failed to watch maps script load");
            }
        });
        if existing.is_none() {
            let head = document.head().ok_or(MapsError::NoDocument)?;
            head.append_child(&script).map_err(|_| MapsError::ScriptLoad)?;
        }
        wasm_bindgen_futures::JsFuture::from(loaded).await.map_err(|_| MapsError::ScriptLoad)?;
        log::info!("maps script loaded");
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api_key;
        Err(MapsError::Unavailable)
    }
}

/// Ask the directions service for a driving route.
///
/// # Errors
///
/// Returns [`RouteError::Provider`] when the service rejects the request and
/// [`RouteError::NoLeg`] when its answer carries no route leg.
pub async fn request_route(request: &RouteRequest) -> Result<RouteSummary<Directions>, RouteError> {
    #[cfg(feature = "csr")]
    {
        let body = js_object(&[
            ("origin", request.origin.as_str().into()),
            ("destination", request.destination.as_str().into()),
            ("travelMode", request.travel_mode.as_provider_str().into()),
        ]);
        let service = bindings::DirectionsService::new();
        let directions = wasm_bindgen_futures::JsFuture::from(service.route(&body))
            .await
            .map_err(|e| RouteError::Provider(e.as_string().unwrap_or_else(|| "directions request failed".to_owned())))?;
        summarize(first_leg(&directions), directions)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(RouteError::Provider(MapsError::Unavailable.to_string()))
    }
}

/// A mounted map and its directions overlay.
#[cfg(feature = "csr")]
pub struct MapHandle {
    renderer: bindings::DirectionsRenderer,
}

#[cfg(feature = "csr")]
impl MapHandle {
    #[must_use]
    pub fn mount(container: &web_sys::HtmlElement, options: &MapOptions) -> Self {
        let center = js_object(&[("lat", options.center.0.into()), ("lng", options.center.1.into())]);
        let js_options = js_object(&[
            ("center", center),
            ("zoom", f64::from(options.zoom).into()),
            ("zoomControl", options.zoom_control.into()),
            ("streetViewControl", options.street_view_control.into()),
            ("mapTypeControl", options.map_type_control.into()),
            ("fullscreenControl", options.fullscreen_control.into()),
        ]);
        let map = bindings::Map::new(container, &js_options);
        let renderer = bindings::DirectionsRenderer::new();
        renderer.set_map(&map);
        Self { renderer }
    }

    /// Draw `directions`, or wipe the overlay when there are none.
    pub fn show(&self, directions: Option<&Directions>) {
        match directions {
            Some(d) => self.renderer.set_directions(d),
            None => self.renderer.set_directions(&js_object(&[("routes", js_sys::Array::new().into())])),
        }
    }
}

/// Place suggestions on a text input. The listener is removed on drop.
#[cfg(feature = "csr")]
pub struct PlaceAutocomplete {
    listener: bindings::MapsEventListener,
    _on_change: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "csr")]
impl PlaceAutocomplete {
    /// Attach suggestions to `input`; `on_place` gets the chosen place's text.
    /// Requires [`ensure_loaded`] to have succeeded.
    #[must_use]
    pub fn attach(input: &web_sys::HtmlInputElement, on_place: impl Fn(String) + 'static) -> Self {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let autocomplete = bindings::Autocomplete::new(input);
        let picker = autocomplete.clone();
        let typed_input = input.clone();
        let on_change = Closure::<dyn FnMut()>::new(move || {
            let place = picker.get_place();
            let field = |key: &str| prop(&place, key).and_then(|v| v.as_string());
            let text = place_text(field("formatted_address").as_deref(), field("name").as_deref(), &typed_input.value());
            if !text.is_empty() {
                on_place(text);
            }
        });
        let listener = autocomplete.add_listener("place_changed", on_change.as_ref().unchecked_ref());
        Self { listener, _on_change: on_change }
    }
}

#[cfg(feature = "csr")]
impl Drop for PlaceAutocomplete {
    fn drop(&mut self) {
        self.listener.remove();
    }
}
