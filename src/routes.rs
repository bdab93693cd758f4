//! Route Guards
//!
//! Which paths a visitor may see depends only on whether a session token
//! exists. Guests get login/register; signed-in users get the dashboard pages.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const SYSTEM_INCLUDE: &str = "/dashboard/system-include";

pub fn edit_path(id: u32) -> String {
    format!("/dashboard/edit/{}", id)
}

/// Who may visit a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    GuestOnly,
    SignedIn,
}

/// Landing page for the current auth state
pub fn home(logged_in: bool) -> &'static str {
    if logged_in {
        DASHBOARD
    } else {
        LOGIN
    }
}

/// Where to send a visitor who may not see a route, if anywhere
pub fn redirect_for(access: Access, logged_in: bool) -> Option<&'static str> {
    match (access, logged_in) {
        (Access::GuestOnly, true) => Some(DASHBOARD),
        (Access::SignedIn, false) => Some(LOGIN),
        _ => None,
    }
}

/// Parse the `:id` segment of the edit route
pub fn parse_id(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryTokenStore, Session, TokenStore};

    #[test]
    fn test_guards() {
        assert_eq!(redirect_for(Access::GuestOnly, false), None);
        assert_eq!(redirect_for(Access::GuestOnly, true), Some(DASHBOARD));
        assert_eq!(redirect_for(Access::SignedIn, true), None);
        assert_eq!(redirect_for(Access::SignedIn, false), Some(LOGIN));
    }

    #[test]
    fn test_home() {
        assert_eq!(home(true), DASHBOARD);
        assert_eq!(home(false), LOGIN);
    }

    #[test]
    fn test_expired_session_routes_to_login() {
        let store = MemoryTokenStore::default();
        store.save("old-token").unwrap();
        let mut session = Session::restore(store);
        assert_eq!(redirect_for(Access::SignedIn, session.is_logged_in()), None);

        session.expire();
        assert_eq!(redirect_for(Access::SignedIn, session.is_logged_in()), Some(LOGIN));
        assert_eq!(home(session.is_logged_in()), LOGIN);
    }

    #[test]
    fn test_edit_path_and_id() {
        assert_eq!(edit_path(12), "/dashboard/edit/12");
        assert_eq!(parse_id(Some("12".into())), Some(12));
        assert_eq!(parse_id(Some("abc".into())), None);
        assert_eq!(parse_id(None), None);
    }
}
