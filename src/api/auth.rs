//! Auth Endpoints
//!
//! Login and account creation. Both answer with a bearer token.

use gloo_net::http::Request;

use super::{decode, endpoint, send};
use crate::context::AuthContext;
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, Registration};

pub async fn login(auth: AuthContext, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    let response = send(auth, Request::post(&endpoint("/auth/login")), Some(credentials)).await?;
    decode(response).await
}

pub async fn register(auth: AuthContext, registration: &Registration) -> Result<AuthResponse, ApiError> {
    let response = send(auth, Request::post(&endpoint("/auth/nova-conta")), Some(registration)).await?;
    decode(response).await
}
