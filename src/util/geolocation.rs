//! One-shot browser geolocation for the rider registration form.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use crate::net::types::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("Unable to get your location. Please allow location access.")]
    Denied,
}

/// Coordinate as it is written back into the latitude/longitude inputs.
#[must_use]
pub fn coordinate_text(value: f64) -> String {
    value.to_string()
}

/// Ask the browser for the current position; `on_done` runs exactly once.
pub fn current_position<F>(on_done: F)
where
    F: FnOnce(Result<GeoPoint, GeolocationError>) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
            on_done(Err(GeolocationError::Unsupported));
            return;
        };

        let slot = Rc::new(RefCell::new(Some(on_done)));
        let ok_slot = Rc::clone(&slot);
        let on_ok = Closure::once_into_js(move |position: wasm_bindgen::JsValue| {
            let outcome = read_position(&position).ok_or(GeolocationError::Denied);
            finish(&ok_slot, outcome);
        });
        let err_slot = Rc::clone(&slot);
        let on_err = Closure::once_into_js(move |_error: wasm_bindgen::JsValue| {
            finish(&err_slot, Err(GeolocationError::Denied));
        });

        if geolocation
            .get_current_position_with_error_callback(on_ok.unchecked_ref(), Some(on_err.unchecked_ref()))
            .is_err()
        {
            finish(&slot, Err(GeolocationError::Unsupported));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        on_done(Err(GeolocationError::Unsupported));
    }
}

#[cfg(feature = "csr")]
fn finish<F, R>(slot: &std::cell::RefCell<Option<F>>, outcome: R)
where
    F: FnOnce(R),
{
    let callback = slot.borrow_mut().take();
    if let Some(callback) = callback {
        callback(outcome);
    }
}

#[cfg(feature = "csr")]
fn read_position(position: &wasm_bindgen::JsValue) -> Option<GeoPoint> {
    use js_sys::Reflect;
    let coords = Reflect::get(position, &"coords".into()).ok()?;
    let lat = Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let long = Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some(GeoPoint { lat, long })
}
