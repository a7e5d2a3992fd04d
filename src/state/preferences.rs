//! Privacy and notification preferences, kept in local storage only.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

pub const PREFERENCES_KEY: &str = "privacyPreferences";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivacyPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub share_location: bool,
}

impl Default for PrivacyPreferences {
    fn default() -> Self {
        Self { email_notifications: true, sms_notifications: false, share_location: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    EmailNotifications,
    SmsNotifications,
    ShareLocation,
}

impl Preference {
    pub const ALL: [Self; 3] = [Self::EmailNotifications, Self::SmsNotifications, Self::ShareLocation];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email notifications",
            Self::SmsNotifications => "SMS notifications",
            Self::ShareLocation => "Share my location with drivers",
        }
    }
}

impl PrivacyPreferences {
    /// Stored preferences, or defaults when absent or unreadable.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match load_json(store, PREFERENCES_KEY) {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(e) => {
                log::warn!("privacy preferences unavailable: {e}");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns the storage error when the write fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        save_json(store, PREFERENCES_KEY, self)
    }

    #[must_use]
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::EmailNotifications => self.email_notifications,
            Preference::SmsNotifications => self.sms_notifications,
            Preference::ShareLocation => self.share_location,
        }
    }

    pub fn set(&mut self, pref: Preference, on: bool) {
        match pref {
            Preference::EmailNotifications => self.email_notifications = on,
            Preference::SmsNotifications => self.sms_notifications = on,
            Preference::ShareLocation => self.share_location = on,
        }
    }
}
