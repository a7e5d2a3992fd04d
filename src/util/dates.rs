//! Calendar date of the browser's local clock.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::{Date, Month};

/// Today's date. Natively this is the UTC date.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        date_from_parts(now.get_full_year(), now.get_month(), now.get_date()).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Build a date from JS `Date` parts (`month0` counts from zero).
#[must_use]
pub fn date_from_parts(year: u32, month0: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = Month::try_from(u8::try_from(month0.checked_add(1)?).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}
