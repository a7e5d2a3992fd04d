//! Landing page with entry points for riders and drivers.

use leptos::prelude::*;

use crate::components::header::SiteHeader;
use crate::state::persona::Persona;

#[component]
fn PersonaCard(persona: Persona, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="card persona-card">
            <h2>{title}</h2>
            <p>{blurb}</p>
            <div class="persona-card__actions">
                <a class="btn btn--primary" href=persona.login_path()>"Sign In"</a>
                <a class="btn btn--outline" href=persona.register_path()>"Register"</a>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="home-page">
            <h1>"Ride across Kerala"</h1>
            <p class="home-page__lead">"Book a ride or drive with Gokeral."</p>
            <div class="home-page__personas">
                <PersonaCard
                    persona=Persona::Rider
                    title="Riders"
                    blurb="Plan a trip, book a car, and keep your bookings in one place."
                />
                <PersonaCard
                    persona=Persona::Driver
                    title="Drivers"
                    blurb="Register your licence and vehicles and start taking bookings."
                />
            </div>
            <a class="btn home-page__map" href="/map">"Plan a route"</a>
        </main>
    }
}
