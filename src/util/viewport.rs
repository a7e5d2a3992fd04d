//! Viewport width tracking for the responsive profile shells.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Width assumed when there is no window (native builds, tests).
pub const FALLBACK_WIDTH: u32 = 1280;

/// Convert a CSS pixel width to whole pixels; junk values read as zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn width_from_px(px: f64) -> u32 {
    if px.is_finite() && px > 0.0 { px.min(f64::from(u32::MAX)) as u32 } else { 0 }
}

/// Current `window.innerWidth`.
pub fn viewport_width() -> u32 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(FALLBACK_WIDTH, width_from_px)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_WIDTH
    }
}

/// Call `on_width` with the new width on every window resize, for as long as
/// the calling component stays mounted.
pub fn on_resize<F>(on_width: F)
where
    F: Fn(u32) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;

        let handle = window_event_listener(leptos::ev::resize, move |_| on_width(viewport_width()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_width;
    }
}
