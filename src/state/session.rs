//! Session context: the locally mirrored current-user snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service is authoritative; this context only mirrors its
//! current-user record (and token) into a [`KeyValueStore`] so pages can
//! hydrate synchronously at mount and profile edits survive a reload. It is
//! created once in `App` and handed down through Leptos context.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unreadable snapshot means "not authenticated". Write-back is
//! best effort: [`Persisted`] reports what happened but callers must not
//! treat it as durable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;
use crate::state::profile::ProfileRecord;
use crate::util::storage::{KeyValueStore, LocalStore, StorageError, load_json, save_json};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
/// One-shot message for the next page, shown once then forgotten.
pub const NOTICE_KEY: &str = "notice";

/// Outcome of mirroring a profile edit into storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Persisted {
    Written,
    /// No current user; only in-memory state changed.
    NoSession,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct SessionContext<S: KeyValueStore = LocalStore> {
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Backing store, for other locally kept records.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current-user snapshot, or `None` when signed out or unreadable.
    pub fn current_user(&self) -> Option<UserRecord> {
        match self.try_current_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("current user unavailable: {e}");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns the storage error when the snapshot cannot be read or decoded.
    pub fn try_current_user(&self) -> Result<Option<UserRecord>, StorageError> {
        load_json(&self.store, USER_KEY)
    }

    /// Replace the snapshot with a freshly fetched record.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the write fails.
    pub fn refresh(&self, user: &UserRecord) -> Result<(), StorageError> {
        save_json(&self.store, USER_KEY, user)
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns the storage error when either write fails.
    pub fn sign_in(&self, user: &UserRecord, token: Option<&str>) -> Result<(), StorageError> {
        self.refresh(user)?;
        match token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => self.store.remove(TOKEN_KEY),
        }
    }

    /// Mirror the editable parts of `profile` into the stored user record.
    pub fn persist_profile(&self, profile: &ProfileRecord) -> Persisted {
        let mut user = match self.try_current_user() {
            Ok(Some(user)) => user,
            Ok(None) => return Persisted::NoSession,
            Err(e) => return Persisted::Failed(e.to_string()),
        };
        profile.write_editable_into(&mut user);
        match self.refresh(&user) {
            Ok(()) => Persisted::Written,
            Err(e) => {
                log::warn!("profile write-back failed: {e}");
                Persisted::Failed(e.to_string())
            }
        }
    }

    /// Forget the user and token.
    pub fn sign_out(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("failed to clear {key}: {e}");
            }
        }
    }

    /// Leave a message for the next page to show.
    pub fn leave_notice(&self, message: &str) {
        if let Err(e) = self.store.set(NOTICE_KEY, message) {
            log::warn!("failed to leave notice: {e}");
        }
    }

    /// Take the pending notice, if any. A second call returns `None`.
    pub fn take_notice(&self) -> Option<String> {
        let notice = match self.store.get(NOTICE_KEY) {
            Ok(notice) => notice?,
            Err(e) => {
                log::warn!("notice unavailable: {e}");
                return None;
            }
        };
        if let Err(e) = self.store.remove(NOTICE_KEY) {
            log::warn!("failed to clear notice: {e}");
        }
        Some(notice)
    }
}
