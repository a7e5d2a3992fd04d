//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{
    driver_profile::DriverProfilePage,
    home::HomePage,
    login::{DriverLoginPage, RiderLoginPage},
    map::MapPage,
    register::{DriverRegisterPage, RiderRegisterPage},
    rider_profile::RiderProfilePage,
};
use crate::state::session::SessionContext;
use crate::util::storage::LocalStore;

/// Session context as provided to every page.
pub type AppSession = SessionContext<LocalStore>;

/// Root application component.
///
/// Provides the build config and the session mirror, then routes. Legacy
/// paths render the same pages as their current counterparts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::load());
    provide_context(AppSession::new(LocalStore));

    view! {
        <Title text="Gokeral"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("user"), StaticSegment("login")) view=RiderLoginPage/>
                <Route path=(StaticSegment("user"), StaticSegment("register")) view=RiderRegisterPage/>
                <Route path=(StaticSegment("user"), StaticSegment("profile")) view=RiderProfilePage/>
                <Route path=(StaticSegment("driver"), StaticSegment("login")) view=DriverLoginPage/>
                <Route path=(StaticSegment("driver"), StaticSegment("register")) view=DriverRegisterPage/>
                <Route path=(StaticSegment("driver"), StaticSegment("profile")) view=DriverProfilePage/>
                <Route path=StaticSegment("map") view=MapPage/>

                <Route path=StaticSegment("login") view=RiderLoginPage/>
                <Route path=StaticSegment("register") view=RiderRegisterPage/>
                <Route path=StaticSegment("userProfile") view=RiderProfilePage/>
                <Route path=StaticSegment("driverLogin") view=DriverLoginPage/>
                <Route path=StaticSegment("driverRegistration") view=DriverRegisterPage/>
                <Route path=StaticSegment("driverProfile") view=DriverProfilePage/>
            </Routes>
        </Router>
    }
}
