//! REST API Client
//!
//! Frontend bindings to the SSD backend, organized by domain. Every call goes
//! through `send`, which attaches the bearer token and turns error statuses
//! into `ApiError`. A 401 clears the session right there, so pages never
//! deal with expiry themselves.

mod auth;
mod system;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::API_BASE_URL;
use crate::context::AuthContext;
use crate::error::ApiError;
use crate::session::bearer_header;

// Re-export all public items
pub use auth::*;
pub use system::*;

/// Absolute URL for an API path such as `/SSD/3`
pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn authorize(auth: AuthContext, request: RequestBuilder) -> RequestBuilder {
    let request = request.header("Accept", "application/json");
    match auth.token() {
        Some(token) => request.header("Authorization", &bearer_header(&token)),
        None => request,
    }
}

/// Send a request and classify the response status
async fn send<B: Serialize + ?Sized>(
    auth: AuthContext,
    request: RequestBuilder,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let request = authorize(auth, request);
    let request = match body {
        Some(body) => request.json(body),
        None => request.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, body);
    if error == ApiError::SessionExpired {
        log::warn!("[API] {} rejected the session token, signing out", response.url());
        auth.expire();
    }
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
