//! Booking history shown on the profile home and bookings tabs.
//!
//! There is no bookings endpoint yet, so the tabs render a fixed sample.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Completed,
    Upcoming,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Modifier class for the status tag.
    #[must_use]
    pub fn tag_class(self) -> &'static str {
        match self {
            Self::Completed => "tag tag--success",
            Self::Upcoming => "tag tag--processing",
            Self::Cancelled => "tag tag--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub id: &'static str,
    pub vehicle: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: BookingStatus,
}

impl Booking {
    #[must_use]
    pub fn date_range(&self) -> String {
        format!("{} → {}", self.start_date, self.end_date)
    }
}

pub const SAMPLE_BOOKINGS: &[Booking] = &[
    Booking {
        id: "BK-001",
        vehicle: "Toyota Camry",
        start_date: "2023-04-10",
        end_date: "2023-04-15",
        status: BookingStatus::Completed,
    },
    Booking {
        id: "BK-002",
        vehicle: "Honda Civic",
        start_date: "2023-05-20",
        end_date: "2023-05-25",
        status: BookingStatus::Upcoming,
    },
];

/// Bookings with `status`, in list order.
pub fn with_status(bookings: &[Booking], status: BookingStatus) -> impl Iterator<Item = &Booking> {
    bookings.iter().filter(move |b| b.status == status)
}
