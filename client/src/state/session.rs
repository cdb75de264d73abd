//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is two string keys in a key/value store. Components never
//! touch `localStorage` directly: they read and write through a
//! [`SessionStore`] held by the [`SessionContext`] provided at the app root,
//! so tests and SSR can substitute [`MemorySessionStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

/// Storage key holding the opaque API token.
pub const TOKEN_KEY: &str = "logToken";

/// Storage key holding the signed-in user's id.
pub const USER_ID_KEY: &str = "loguserId";

/// Key/value persistence for session fields.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove both session keys.
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_ID_KEY);
    }
}

/// In-process store for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Browser `localStorage`. Every call re-resolves the storage handle, so the
/// type holds no JS values and stays `Send + Sync`. Failures are silent.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// A signed-in session as returned by login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl Session {
    pub fn save(&self, store: &dyn SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(USER_ID_KEY, &self.user_id);
    }
}

/// Stored token, treating an empty value as absent.
pub fn stored_token(store: &dyn SessionStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|v| !v.is_empty())
}

/// Stored user id, treating an empty value as absent.
pub fn stored_user_id(store: &dyn SessionStore) -> Option<String> {
    store.get(USER_ID_KEY).filter(|v| !v.is_empty())
}

/// Token and user id are both present.
pub fn is_authenticated(store: &dyn SessionStore) -> bool {
    stored_token(store).is_some() && stored_user_id(store).is_some()
}

/// Session handle provided through Leptos context.
///
/// `authenticated` starts `false` on both server and client so hydration
/// matches; components call [`SessionContext::refresh`] from an effect.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<Arc<dyn SessionStore>>,
    authenticated: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store: StoredValue::new(store), authenticated: RwSignal::new(false) }
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.get_value()
    }

    /// Recompute the authenticated flag from the store and return it.
    pub fn refresh(&self) -> bool {
        let next = is_authenticated(self.store().as_ref());
        self.authenticated.set(next);
        next
    }

    /// Reactive read of the last computed flag.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn user_id(&self) -> Option<String> {
        stored_user_id(self.store().as_ref())
    }

    /// Clear both keys. No server call is made to revoke the token.
    pub fn sign_out(&self) {
        self.store().clear();
        self.authenticated.set(false);
    }
}
