use super::*;
use crate::state::persona::Persona;
use crate::state::profile::{PersonalInfoUpdate, merge_personal_info};
use crate::util::storage::MemoryStore;
use serde_json::json;

fn session_with(raw_user: Option<serde_json::Value>) -> (SessionContext<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    if let Some(raw) = raw_user {
        store.set(USER_KEY, &raw.to_string()).unwrap();
    }
    (SessionContext::new(store.clone()), store)
}

#[test]
fn current_user_none_when_signed_out() {
    let (session, _) = session_with(None);
    assert!(session.current_user().is_none());
}

#[test]
fn current_user_none_when_snapshot_corrupt() {
    let (session, store) = session_with(None);
    store.set(USER_KEY, "{oops").unwrap();
    assert!(session.current_user().is_none());
    assert!(session.try_current_user().is_err());
}

#[test]
fn sign_in_then_sign_out() {
    let (session, store) = session_with(None);
    let user: UserRecord = serde_json::from_value(json!({ "fullName": "Asha" })).unwrap();
    session.sign_in(&user, Some("tok-1")).unwrap();
    assert_eq!(session.current_user().map(|u| u.full_name), Some("Asha".to_owned()));
    assert_eq!(store.get(TOKEN_KEY).unwrap(), Some("tok-1".to_owned()));

    session.sign_out();
    assert!(session.current_user().is_none());
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn persist_profile_without_session_is_noop() {
    let (session, store) = session_with(None);
    let profile = ProfileRecord::empty(Persona::Driver);
    assert_eq!(session.persist_profile(&profile), Persisted::NoSession);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[test]
fn persist_profile_mirrors_edit_and_keeps_other_fields() {
    let (session, _) = session_with(Some(json!({
        "fullName": "Ravi",
        "driverLicenseNumber": "KL07",
        "_id": "abc",
        "personalInfo": { "bloodGroup": "A+", "emergencyContact": { "name": "Anu", "phone": "9123456780", "relationship": "Sister" } }
    })));
    let user = session.current_user().unwrap();
    let profile = ProfileRecord::from_user(&user, Persona::Driver);
    let edited = merge_personal_info(&profile, &PersonalInfoUpdate { blood_group: "O+".to_owned(), ..PersonalInfoUpdate::default() });

    assert_eq!(session.persist_profile(&edited), Persisted::Written);

    let reloaded = session.current_user().unwrap();
    assert_eq!(reloaded.personal_info.blood_group, "O+");
    assert_eq!(reloaded.personal_info.emergency_contact.name, "Anu");
    assert_eq!(reloaded.driver_license_number, "KL07");
    assert_eq!(reloaded.extra.get("_id"), Some(&json!("abc")));
}

#[test]
fn reload_reflects_persisted_edit() {
    let (session, store) = session_with(Some(json!({ "fullName": "Ravi" })));
    let profile = ProfileRecord::from_user(&session.current_user().unwrap(), Persona::Driver);
    let edited = merge_personal_info(&profile, &PersonalInfoUpdate { address: "Aluva".to_owned(), ..PersonalInfoUpdate::default() });
    session.persist_profile(&edited);

    let fresh = SessionContext::new(store);
    let rehydrated = ProfileRecord::from_user(&fresh.current_user().unwrap(), Persona::Driver);
    assert_eq!(rehydrated.address, "Aluva");
}

#[test]
fn snapshot_with_nulls_still_signs_in() {
    let (session, _) = session_with(Some(json!({
        "fullName": "Asha",
        "address": null,
        "personalInfo": { "bloodGroup": "B+", "languages": null }
    })));
    let user = session.try_current_user().unwrap().unwrap();
    assert_eq!(user.full_name, "Asha");
    assert_eq!(user.personal_info.blood_group, "B+");
    assert!(session.current_user().is_some());
}

#[test]
fn notice_is_shown_once() {
    let (session, store) = session_with(None);
    assert_eq!(session.take_notice(), None);
    session.leave_notice("Logged out successfully");
    assert_eq!(session.take_notice().as_deref(), Some("Logged out successfully"));
    assert_eq!(session.take_notice(), None);
    assert_eq!(store.get(NOTICE_KEY).unwrap(), None);
}

#[test]
fn sign_out_keeps_pending_notice() {
    let (session, _) = session_with(None);
    session.leave_notice("hello");
    session.sign_out();
    assert_eq!(session.take_notice().as_deref(), Some("hello"));
}
