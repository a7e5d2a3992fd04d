//! Bookings tab: booking history with a status filter.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::bookings::{Booking, BookingStatus, SAMPLE_BOOKINGS, with_status};

#[component]
pub fn StatusTag(status: BookingStatus) -> impl IntoView {
    view! { <span class=status.tag_class()>{status.label()}</span> }
}

const FILTERS: [Option<BookingStatus>; 4] =
    [None, Some(BookingStatus::Completed), Some(BookingStatus::Upcoming), Some(BookingStatus::Cancelled)];

fn filtered(filter: Option<BookingStatus>) -> Vec<&'static Booking> {
    match filter {
        Some(status) => with_status(SAMPLE_BOOKINGS, status).collect(),
        None => SAMPLE_BOOKINGS.iter().collect(),
    }
}

#[component]
pub fn BookingsTab(#[prop(default = "My Bookings")] title: &'static str) -> impl IntoView {
    let filter = RwSignal::new(None::<BookingStatus>);

    let filter_buttons = FILTERS
        .into_iter()
        .map(|f| {
            let label = f.map_or("All", BookingStatus::label);
            view! {
                <button
                    class=move || if filter.get() == f { "chip chip--active" } else { "chip" }
                    on:click=move |_| filter.set(f)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let rows = move || {
        let bookings = filtered(filter.get());
        if bookings.is_empty() {
            return view! { <tr><td colspan="4" class="muted">"No bookings found"</td></tr> }.into_any();
        }
        bookings
            .into_iter()
            .map(|b| {
                view! {
                    <tr>
                        <td>{b.id}</td>
                        <td>{b.vehicle}</td>
                        <td>{b.date_range()}</td>
                        <td><StatusTag status=b.status/></td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="card bookings-tab">
            <h2>{title}</h2>
            <div class="chip-row">{filter_buttons}</div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Booking"</th>
                        <th>"Vehicle"</th>
                        <th>"Dates"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
