use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn missing_preferences_load_defaults() {
    let store = MemoryStore::default();
    assert_eq!(PrivacyPreferences::load(&store), PrivacyPreferences::default());
}

#[test]
fn corrupt_preferences_load_defaults() {
    let store = MemoryStore::default();
    store.set(PREFERENCES_KEY, "[1,2").unwrap();
    assert_eq!(PrivacyPreferences::load(&store), PrivacyPreferences::default());
}

#[test]
fn toggled_preference_survives_reload() {
    let store = MemoryStore::default();
    let mut prefs = PrivacyPreferences::load(&store);
    prefs.set(Preference::SmsNotifications, true);
    prefs.set(Preference::ShareLocation, false);
    prefs.save(&store).unwrap();

    let reloaded = PrivacyPreferences::load(&store);
    assert!(reloaded.get(Preference::SmsNotifications));
    assert!(!reloaded.get(Preference::ShareLocation));
    assert!(reloaded.get(Preference::EmailNotifications));
}

#[test]
fn partial_record_fills_defaults() {
    let store = MemoryStore::default();
    store.set(PREFERENCES_KEY, r#"{"smsNotifications":true}"#).unwrap();
    let prefs = PrivacyPreferences::load(&store);
    assert!(prefs.sms_notifications);
    assert!(prefs.email_notifications);
}
