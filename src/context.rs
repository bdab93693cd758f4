//! Application Context
//!
//! Auth state provided via Leptos Context API. Pages and the API client get
//! the session from here instead of touching storage directly.

use leptos::prelude::*;

use crate::error::StorageError;
use crate::session::{LocalStorageTokenStore, Session};

/// Session signals shared by the router, pages and the API client
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session<LocalStorageTokenStore>>,
    /// Changes only when the token appears or disappears
    logged_in: Memo<bool>,
}

impl AuthContext {
    /// Restore the session persisted in localStorage
    pub fn restore() -> Self {
        let session = RwSignal::new(Session::restore(LocalStorageTokenStore));
        let logged_in = Memo::new(move |_| session.with(|s| s.is_logged_in()));
        Self { session, logged_in }
    }

    /// Reactive logged-in flag; the router re-evaluates when it flips
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Current token without subscribing to changes
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }

    /// Store a token returned by login or registration
    pub fn sign_in(&self, token: String) -> Result<(), StorageError> {
        let mut result = Ok(());
        self.session.update(|s| result = s.sign_in(token));
        result
    }

    pub fn sign_out(&self) {
        self.session.update(|s| s.sign_out());
    }

    /// Drop the token after a 401; the router redirects to login
    pub fn expire(&self) {
        self.session.update(|s| s.expire());
    }

    /// Whether the user was signed out by a 401 and has not signed in since
    pub fn session_expired(&self) -> bool {
        self.session.with_untracked(|s| s.is_expired())
    }
}

/// Get the auth context provided by `App`
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
