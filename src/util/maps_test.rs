use super::*;

#[test]
fn options_hide_all_controls() {
    let options = MapOptions::new((9.9312, 76.2673), 15);
    assert_eq!(options.center, (9.9312, 76.2673));
    assert_eq!(options.zoom, 15);
    assert!(!options.zoom_control);
    assert!(!options.street_view_control);
    assert!(!options.map_type_control);
    assert!(!options.fullscreen_control);
}

#[test]
fn script_url_loads_places_library() {
    assert_eq!(
        script_url("AIza-key_1"),
        "https://maps.googleapis.com/maps/api/js?key=AIza-key_1&libraries=places"
    );
}

#[test]
fn script_url_strips_query_breaking_characters() {
    assert_eq!(
        script_url("abc&callback=x"),
        "https://maps.googleapis.com/maps/api/js?key=abccallbackx&libraries=places"
    );
}

#[test]
fn summarize_uses_first_leg_text() {
    let leg = LegText { distance: "12.4 km".to_owned(), duration: "28 mins".to_owned() };
    let summary = summarize(Some(leg), "raw").unwrap();
    assert_eq!(summary.distance_text, "12.4 km");
    assert_eq!(summary.duration_text, "28 mins");
    assert_eq!(summary.directions, "raw");
}

#[test]
fn summarize_without_leg_fails() {
    assert_eq!(summarize(None, ()), Err(RouteError::NoLeg));
}

#[test]
fn picked_place_prefers_formatted_address() {
    assert_eq!(
        place_text(Some("Kakkanad, Kochi, Kerala, India"), Some("Kakkanad"), "kakk"),
        "Kakkanad, Kochi, Kerala, India"
    );
}

#[test]
fn picked_place_falls_back_to_name_then_typed_text() {
    assert_eq!(place_text(None, Some("Lulu Mall"), "lulu"), "Lulu Mall");
    assert_eq!(place_text(Some("  "), None, " Edappally "), "Edappally");
    assert_eq!(place_text(None, None, ""), "");
}
