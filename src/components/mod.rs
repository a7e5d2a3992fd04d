//! UI components shared by the pages.

pub mod banner;
pub mod bookings_tab;
pub mod form_field;
pub mod header;
pub mod home_tab;
pub mod map_area;
pub mod map_controls;
pub mod personal_info_modal;
pub mod personal_tab;
pub mod settings_tab;
pub mod sidebar;
pub mod vehicles_tab;
