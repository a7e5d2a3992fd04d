use std::cell::RefCell;

use super::*;
use crate::state::session::USER_KEY;
use crate::util::storage::MemoryStore;

fn record(log: &RefCell<Vec<(String, bool)>>) -> impl Fn(&str, NavigateOptions) + '_ {
    move |path, opts| log.borrow_mut().push((path.to_owned(), opts.replace))
}

#[test]
fn signed_out_driver_redirects_to_driver_login() {
    let session = SessionContext::new(MemoryStore::default());
    let log = RefCell::new(Vec::new());
    let profile = hydrate_or_redirect(&session, Persona::Driver, record(&log));
    assert!(profile.is_none());
    assert_eq!(log.into_inner(), vec![("/driver/login".to_owned(), true)]);
}

#[test]
fn signed_in_rider_hydrates_without_navigation() {
    let store = MemoryStore::default();
    store.set(USER_KEY, r#"{"fullName":"Meera","email":"meera@example.com"}"#).unwrap();
    let session = SessionContext::new(store);
    let log = RefCell::new(Vec::new());
    let profile = hydrate_or_redirect(&session, Persona::Rider, record(&log)).unwrap();
    assert_eq!(profile.name, "Meera");
    assert_eq!(profile.location_text(), "Not set");
    assert!(log.into_inner().is_empty());
}

#[test]
fn corrupt_snapshot_counts_as_signed_out() {
    let store = MemoryStore::default();
    store.set(USER_KEY, "not json").unwrap();
    let session = SessionContext::new(store);
    let log = RefCell::new(Vec::new());
    assert!(hydrate_or_redirect(&session, Persona::Rider, record(&log)).is_none());
    assert_eq!(log.into_inner()[0].0, "/user/login");
}

#[test]
fn logout_clears_session_and_navigates() {
    let store = MemoryStore::default();
    store.set(USER_KEY, "{}").unwrap();
    let session = SessionContext::new(store.clone());
    let log = RefCell::new(Vec::new());
    logout_and_redirect(&session, Persona::Driver, record(&log));
    assert_eq!(store.get(USER_KEY).unwrap(), None);
    assert_eq!(log.into_inner(), vec![("/driver/login".to_owned(), false)]);
    assert_eq!(session.take_notice().as_deref(), Some(LOGGED_OUT_MESSAGE));
}
