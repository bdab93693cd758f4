//! Error Types
//!
//! Failures surfaced by the API client and the token store.

use thiserror::Error;

use crate::models::IdentityError;

/// Identity error code the backend uses for an already registered email
const DUPLICATE_USER_CODE: &str = "DuplicateUserName";

/// Every way a REST call can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 400; the raw body is kept for callers that inspect it
    #[error("bad request")]
    BadRequest { body: String },
    /// 401; the session token has already been cleared
    #[error("session expired")]
    SessionExpired,
    #[error("server error (status {status})")]
    Server { status: u16 },
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => ApiError::BadRequest { body },
            401 => ApiError::SessionExpired,
            500..=599 => ApiError::Server { status },
            _ => ApiError::Status { status },
        }
    }

    /// True when a 400 body lists a `DuplicateUserName` identity error
    pub fn is_duplicate_account(&self) -> bool {
        let ApiError::BadRequest { body } = self else {
            return false;
        };
        serde_json::from_str::<Vec<IdentityError>>(body)
            .map(|errors| errors.iter().any(|e| e.code == DUPLICATE_USER_CODE))
            .unwrap_or(false)
    }
}

/// Persistent token storage failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write token: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_taxonomy() {
        assert_eq!(
            ApiError::from_status(400, "x".into()),
            ApiError::BadRequest { body: "x".into() }
        );
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::SessionExpired);
        assert_eq!(ApiError::from_status(500, String::new()), ApiError::Server { status: 500 });
        assert_eq!(ApiError::from_status(503, String::new()), ApiError::Server { status: 503 });
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::Status { status: 404 });
    }

    #[test]
    fn test_duplicate_account_detection() {
        let dup = ApiError::BadRequest {
            body: r#"[{"code":"DuplicateUserName","description":"taken"}]"#.into(),
        };
        assert!(dup.is_duplicate_account());

        let other = ApiError::BadRequest {
            body: r#"[{"code":"PasswordTooShort"}]"#.into(),
        };
        assert!(!other.is_duplicate_account());

        let not_json = ApiError::BadRequest { body: "Bad Request".into() };
        assert!(!not_json.is_duplicate_account());

        assert!(!ApiError::Server { status: 500 }.is_duplicate_account());
    }
}
