use super::*;
use time::macros::date;

#[test]
fn month_is_zero_based() {
    assert_eq!(date_from_parts(2024, 0, 31), Some(date!(2024 - 01 - 31)));
    assert_eq!(date_from_parts(2024, 11, 1), Some(date!(2024 - 12 - 01)));
}

#[test]
fn invalid_parts_are_none() {
    assert_eq!(date_from_parts(2023, 1, 29), None);
    assert_eq!(date_from_parts(2024, 12, 1), None);
    assert_eq!(date_from_parts(2024, 0, 0), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn today_is_after_epoch() {
    assert!(today() > date!(2020 - 01 - 01));
}
