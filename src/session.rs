//! Session Token Storage
//!
//! The bearer token lives in browser localStorage; its presence is what
//! "logged in" means. Storage sits behind `TokenStore` so the session logic
//! can run against an in-memory store in tests.

use std::cell::RefCell;

use crate::config::TOKEN_STORAGE_KEY;
use crate::error::StorageError;

/// Persistent home of the bearer token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Token kept JSON-encoded in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let raw = Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        decode_token(&raw)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(token).map_err(|e| StorageError::Write(e.to_string()))?;
        storage
            .set_item(TOKEN_STORAGE_KEY, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Logged-in state over a token store
#[derive(Debug, Clone, Default)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
    expired: bool,
}

impl<S: TokenStore> Session<S> {
    /// Restore whatever token the store already holds
    pub fn restore(store: S) -> Self {
        let token = store.load();
        Self { store, token, expired: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persist a fresh token. The in-memory session is updated even if
    /// storage fails, so the current tab stays signed in.
    pub fn sign_in(&mut self, token: String) -> Result<(), StorageError> {
        let saved = self.store.save(&token);
        self.token = Some(token);
        self.expired = false;
        saved
    }

    pub fn sign_out(&mut self) {
        self.store.clear();
        self.token = None;
    }

    /// Server rejected the token (401)
    pub fn expire(&mut self) {
        if self.token.is_some() {
            self.expired = true;
        }
        self.sign_out();
    }

    /// Whether the last sign-out came from an expired token
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Stored value is a JSON string; blank tokens count as absent
fn decode_token(raw: &str) -> Option<String> {
    serde_json::from_str::<String>(raw)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// `Authorization` header value for a token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_decode_token() {
        assert_eq!(decode_token(r#""eyJhbGciOi""#).as_deref(), Some("eyJhbGciOi"));
        assert_eq!(decode_token(r#""""#), None);
        assert_eq!(decode_token("not json"), None);
        assert_eq!(decode_token("null"), None);
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer_header("t0k"), "Bearer t0k");
    }

    #[test]
    fn test_session_restores_existing_token() {
        let store = MemoryTokenStore::default();
        store.save("persisted").unwrap();
        let session = Session::restore(store);
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("persisted"));
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::restore(MemoryTokenStore::default());
        assert!(!session.is_logged_in());
        session.sign_in("fresh".into()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.store.load().as_deref(), Some("fresh"));
        session.sign_out();
        assert!(!session.is_logged_in());
        assert_eq!(session.store.load(), None);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expire_clears_token_and_flags() {
        let mut session = Session::restore(MemoryTokenStore::default());
        session.sign_in("stale".into()).unwrap();
        session.expire();
        assert!(!session.is_logged_in());
        assert_eq!(session.store.load(), None);
        assert!(session.is_expired());

        session.sign_in("new".into()).unwrap();
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expire_without_token_does_not_flag() {
        let mut session = Session::restore(MemoryTokenStore::default());
        session.expire();
        assert!(!session.is_expired());
    }
}
