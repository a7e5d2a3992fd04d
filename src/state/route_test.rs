use super::*;

fn summary(distance: &str, duration: &str) -> RouteSummary<()> {
    RouteSummary { distance_text: distance.to_owned(), duration_text: duration.to_owned(), directions: () }
}

fn query(origin: &str, destination: &str) -> RouteQuery<()> {
    RouteQuery { origin: origin.to_owned(), destination: destination.to_owned(), result: None }
}

#[test]
fn request_requires_both_endpoints() {
    assert_eq!(query("", "Aluva").request(), None);
    assert_eq!(query("Kochi", "").request(), None);
    assert_eq!(query("  ", "Aluva").request(), None);
}

#[test]
fn request_uses_driving_mode() {
    let req = query(" Kochi ", "Aluva").request().unwrap();
    assert_eq!(req.origin, "Kochi");
    assert_eq!(req.destination, "Aluva");
    assert_eq!(req.travel_mode, TravelMode::Driving);
    assert_eq!(req.travel_mode.as_provider_str(), "DRIVING");
}

#[test]
fn apply_success_exposes_distance_and_duration() {
    let mut q = query("Kochi", "Aluva");
    q.apply_success(summary("21.3 km", "38 mins"));
    assert_eq!(q.distance_text(), Some("21.3 km"));
    assert_eq!(q.duration_text(), Some("38 mins"));
    assert_eq!(q.directions(), Some(&()));
}

#[test]
fn new_success_replaces_previous_result() {
    let mut q = query("Kochi", "Aluva");
    q.apply_success(summary("21.3 km", "38 mins"));
    q.apply_success(summary("5 km", "9 mins"));
    assert_eq!(q.distance_text(), Some("5 km"));
}

#[test]
fn clear_after_success_resets_everything() {
    let mut q = query("Kochi", "Aluva");
    q.apply_success(summary("21.3 km", "38 mins"));
    q.clear();
    assert_eq!(q.distance_text(), None);
    assert_eq!(q.duration_text(), None);
    assert_eq!(q.origin, "");
    assert_eq!(q.destination, "");
    assert_eq!(q, RouteQuery::default());
}

#[test]
fn clear_on_fresh_query_is_harmless() {
    let mut q = RouteQuery::<()>::default();
    q.clear();
    assert_eq!(q, RouteQuery::default());
}

#[test]
fn route_error_messages() {
    assert_eq!(RouteError::NoLeg.to_string(), "directions result has no route leg");
    assert_eq!(RouteError::Provider("ZERO_RESULTS".to_owned()).to_string(), "directions provider failed: ZERO_RESULTS");
}
