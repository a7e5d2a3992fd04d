//! Profile tab navigation for both personas.
//!
//! DESIGN
//! ======
//! Each persona has a closed tab set. Every tab is reachable from every other
//! tab; [`ProfileChrome`] couples selection with the responsive shell so a
//! pick on a narrow viewport also closes the sidebar.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::state::shell::{BREAKPOINT_LG, BREAKPOINT_MD, Breakpoint, ResponsiveShell};

/// A persona's closed set of profile tabs.
pub trait TabSet: Copy + Eq + Default + Send + Sync + 'static {
    /// Menu order.
    const ALL: &'static [Self];
    /// Sidebar breakpoint for the persona's layout.
    const BREAKPOINT: Breakpoint;

    /// Stable key, used as the menu item id.
    fn key(self) -> &'static str;
    fn label(self) -> &'static str;

    #[must_use]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RiderTab {
    #[default]
    Home,
    Personal,
    Bookings,
    Security,
    Privacy,
    Data,
}

impl TabSet for RiderTab {
    const ALL: &'static [Self] = &[Self::Home, Self::Personal, Self::Bookings, Self::Security, Self::Privacy, Self::Data];
    const BREAKPOINT: Breakpoint = Breakpoint::NarrowThrough(BREAKPOINT_MD);

    fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Personal => "personal",
            Self::Bookings => "bookings",
            Self::Security => "security",
            Self::Privacy => "privacy",
            Self::Data => "data",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Personal => "Personal Info",
            Self::Bookings => "My Bookings",
            Self::Security => "Sign-in & Security",
            Self::Privacy => "Privacy",
            Self::Data => "Data Management",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DriverTab {
    #[default]
    Home,
    PersonalInfo,
    Bookings,
    Vehicles,
    Settings,
}

impl TabSet for DriverTab {
    const ALL: &'static [Self] = &[Self::Home, Self::PersonalInfo, Self::Bookings, Self::Vehicles, Self::Settings];
    const BREAKPOINT: Breakpoint = Breakpoint::WideFrom(BREAKPOINT_LG);

    fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::PersonalInfo => "personalInfo",
            Self::Bookings => "bookings",
            Self::Vehicles => "vehicles",
            Self::Settings => "settings",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::PersonalInfo => "Personal Info",
            Self::Bookings => "Bookings",
            Self::Vehicles => "Vehicles",
            Self::Settings => "Settings",
        }
    }
}

/// Active-tab tracker. Starts on the default (home) tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabNavigator<T: TabSet> {
    active: T,
}

impl<T: TabSet> TabNavigator<T> {
    #[must_use]
    pub fn active(&self) -> T {
        self.active
    }

    pub fn select(&mut self, tab: T) {
        self.active = tab;
    }

    /// Back to the default tab, as on remount or logout.
    pub fn reset(&mut self) {
        self.active = T::default();
    }

    #[must_use]
    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }
}

/// Tab navigator plus sidebar shell for one profile page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileChrome<T: TabSet> {
    pub tabs: TabNavigator<T>,
    pub shell: ResponsiveShell,
}

impl<T: TabSet> ProfileChrome<T> {
    #[must_use]
    pub fn new(viewport_width: u32) -> Self {
        Self { tabs: TabNavigator::default(), shell: ResponsiveShell::new(T::BREAKPOINT, viewport_width) }
    }

    /// Switch tabs; on a narrow viewport this also closes the sidebar.
    pub fn select_tab(&mut self, tab: T) {
        self.tabs.select(tab);
        if self.shell.is_narrow() {
            self.shell.close();
        }
    }
}
