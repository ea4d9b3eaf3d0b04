//! Persisted login session for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration persist the auth reply here; dashboards read the
//! display name back for their greeting and logout wipes the namespace. There
//! is no expiry, refresh, or client-side role enforcement: a session exists
//! exactly while a token is readable.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and swallowed at this layer. A user whose
//! browser refuses to persist simply appears logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthResponse, Role};
use crate::util::storage::{BrowserStore, KeyValueStore, NamespacedStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_NAME_KEY: &str = "userName";

/// Whether a session is currently persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    Authenticated,
}

/// Session identity stored under the `app:` namespace.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: NamespacedStore<S>,
}

impl Session<BrowserStore> {
    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(NamespacedStore::new(BrowserStore))
    }
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: NamespacedStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NamespacedStore<S> {
        &self.store
    }

    /// Persist a successful auth reply. The role is stored lower-cased.
    ///
    /// Every key is attempted even if an earlier write fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure encountered.
    pub fn persist(&self, resp: &AuthResponse) -> Result<(), StorageError> {
        let role = resp.role.to_lowercase();
        let writes = [
            (TOKEN_KEY, resp.token.as_str()),
            (USER_ROLE_KEY, role.as_str()),
            (USER_EMAIL_KEY, resp.email.as_str()),
            (USER_NAME_KEY, resp.name.as_str()),
        ];
        let mut first_err = None;
        for (key, value) in writes {
            if let Err(e) = self.store.set(key, value) {
                log::warn!("failed to persist {key}: {e}");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn role(&self) -> Option<String> {
        self.read(USER_ROLE_KEY)
    }

    pub fn email(&self) -> Option<String> {
        self.read(USER_EMAIL_KEY)
    }

    pub fn name(&self) -> Option<String> {
        self.read(USER_NAME_KEY)
    }

    /// Persisted name for greetings, or `fallback` (e.g. `"Student"`).
    pub fn display_name(&self, fallback: &str) -> String {
        self.name()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| fallback.to_owned())
    }

    /// Greeting name with the role label as fallback.
    pub fn display_name_for(&self, role: Role) -> String {
        self.display_name(role.label())
    }

    pub fn status(&self) -> SessionStatus {
        match self.token() {
            Some(token) if !token.is_empty() => SessionStatus::Authenticated,
            _ => SessionStatus::Anonymous,
        }
    }

    /// Drop every namespaced key. Returns how many were removed; zero when
    /// storage is unreachable.
    pub fn logout(&self) -> usize {
        match self.store.clear_all() {
            Ok(removed) => removed,
            Err(e) => {
                log::warn!("failed to clear session storage: {e}");
                0
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("session read of {key} failed: {e}");
                None
            }
        }
    }
}
