use super::*;

#[test]
fn sample_has_one_completed_and_one_upcoming() {
    let completed: Vec<_> = with_status(SAMPLE_BOOKINGS, BookingStatus::Completed).map(|b| b.id).collect();
    let upcoming: Vec<_> = with_status(SAMPLE_BOOKINGS, BookingStatus::Upcoming).map(|b| b.id).collect();
    assert_eq!(completed, vec!["BK-001"]);
    assert_eq!(upcoming, vec!["BK-002"]);
    assert_eq!(with_status(SAMPLE_BOOKINGS, BookingStatus::Cancelled).count(), 0);
}

#[test]
fn status_tags_are_distinct() {
    let classes = [BookingStatus::Completed, BookingStatus::Upcoming, BookingStatus::Cancelled].map(BookingStatus::tag_class);
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_eq!(BookingStatus::Cancelled.label(), "Cancelled");
}

#[test]
fn date_range_joins_with_arrow() {
    assert_eq!(SAMPLE_BOOKINGS[0].date_range(), "2023-04-10 → 2023-04-15");
}
