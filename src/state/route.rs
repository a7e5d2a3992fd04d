//! Trip-planning route query for the map screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map page owns one [`RouteQuery`]. `request()` gates the directions
//! call, the provider's answer is applied with `apply_success`, and failures
//! leave the previous state in place. There is no retry, caching, or
//! cancellation of an in-flight request.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Message shown in the blocking alert when the provider fails.
pub const ROUTE_FAILED_MESSAGE: &str = "Could not calculate route. Please check the addresses.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Driving,
}

impl TravelMode {
    /// Provider constant (`google.maps.TravelMode.DRIVING`).
    #[must_use]
    pub fn as_provider_str(self) -> &'static str {
        match self {
            Self::Driving => "DRIVING",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub travel_mode: TravelMode,
}

/// First route / first leg of a provider answer plus the opaque directions
/// object the map widget renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary<D> {
    pub distance_text: String,
    pub duration_text: String,
    pub directions: D,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("directions provider failed: {0}")]
    Provider(String),
    #[error("directions result has no route leg")]
    NoLeg,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteQuery<D> {
    pub origin: String,
    pub destination: String,
    pub result: Option<RouteSummary<D>>,
}

impl<D> Default for RouteQuery<D> {
    fn default() -> Self {
        Self { origin: String::new(), destination: String::new(), result: None }
    }
}

impl<D> RouteQuery<D> {
    /// The provider request, or `None` when either endpoint is blank.
    #[must_use]
    pub fn request(&self) -> Option<RouteRequest> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return None;
        }
        Some(RouteRequest {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            travel_mode: TravelMode::Driving,
        })
    }

    pub fn apply_success(&mut self, summary: RouteSummary<D>) {
        self.result = Some(summary);
    }

    /// Reset both endpoints and the computed result.
    pub fn clear(&mut self) {
        self.origin.clear();
        self.destination.clear();
        self.result = None;
    }

    #[must_use]
    pub fn distance_text(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.distance_text.as_str())
    }

    #[must_use]
    pub fn duration_text(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.duration_text.as_str())
    }

    #[must_use]
    pub fn directions(&self) -> Option<&D> {
        self.result.as_ref().map(|r| &r.directions)
    }
}
