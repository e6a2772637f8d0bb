//! # HTTP client for the Crewdesk API
//!
//! [`ApiClient`] performs exactly one request per call: no retries, no
//! timeout. Every response is decoded through the same path:
//!
//! 1. Transport failure → [`ApiError::Transport`] carrying the operation's
//!    fallback message.
//! 2. Non-2xx → [`ApiError::Rejected`] with the body's `error` field, or the
//!    fallback when the body has none.
//! 3. 2xx → the `data` of an [`ApiResponse`], or [`ApiError::Decode`].
//!
//! The bearer token is passed in by the caller; the client holds no session.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::User;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ApiResponse, AuthSession, LoginRequest, ProfilePatch, RegisterRequest};

const UPDATE_FAILED: &str = "Update failed";
const LOGIN_FAILED: &str = "Login failed";
const REGISTER_FAILED: &str = "Registration failed";
const LOGOUT_FAILED: &str = "Logout failed";
const REQUEST_FAILED: &str = "Request failed";

/// Error body of a failed request. Anything else in it is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the Crewdesk REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from `API_URL`, see [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an account and return its first session.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.url("/auth/register")).json(&body);
        send(request, REGISTER_FAILED).await
    }

    /// Exchange email and password for a session.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.url("/auth/login")).json(&body);
        send(request, LOGIN_FAILED).await
    }

    /// Fetch the user the token belongs to.
    #[tracing::instrument(skip(self, token))]
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let request = self.http.get(self.url("/auth/me")).bearer_auth(token);
        send(request, REQUEST_FAILED).await
    }

    /// Revoke `token` on the server.
    #[tracing::instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let request = self.http.post(self.url("/auth/logout")).bearer_auth(token);
        send::<bool>(request, LOGOUT_FAILED).await.map(|_| ())
    }

    /// `PUT /auth/profile` and return the updated user.
    #[tracing::instrument(skip(self, token, patch))]
    pub async fn update_profile(
        &self,
        token: &str,
        patch: &ProfilePatch,
    ) -> Result<User, ApiError> {
        let request = self
            .http
            .put(self.url("/auth/profile"))
            .bearer_auth(token)
            .json(patch);
        send(request, UPDATE_FAILED).await
    }
}

async fn send<T: DeserializeOwned>(
    request: RequestBuilder,
    fallback: &'static str,
) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::Transport { fallback, source })?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { fallback, source })?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        tracing::debug!("Request rejected with {}: {}", status, message);
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: ApiResponse<T> =
        serde_json::from_str(&body).map_err(|e| decode_error(fallback, e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message: envelope.error.unwrap_or_else(|| fallback.to_string()),
        });
    }
    envelope
        .data
        .ok_or_else(|| decode_error(fallback, "response is missing data".to_string()))
}

fn decode_error(fallback: &'static str, detail: String) -> ApiError {
    tracing::warn!("Unexpected response body: {}", detail);
    ApiError::Decode { fallback, detail }
}
