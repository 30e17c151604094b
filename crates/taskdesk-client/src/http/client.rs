/*
[INPUT]:  HTTP configuration (base URL, timeouts, session token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{PortalError, Result};

/// Name of the session cookie issued by POST /auth/login
pub const SESSION_COOKIE: &str = "accessToken";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Session token carried as the `accessToken` cookie on protected requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub access_token: String,
}

impl SessionToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

/// Main HTTP client for the task portal backend
#[derive(Debug, Clone)]
pub struct PortalClient {
    http_client: Client,
    base_url: Url,
    session: Option<SessionToken>,
}

impl PortalClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            session: None,
        })
    }

    /// Set the session token for authenticated requests
    pub fn set_session(&mut self, session: SessionToken) {
        self.session = Some(session);
    }

    /// Get the session token if set
    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    /// Drop the session token
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for public endpoints
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder carrying the session cookie.
    ///
    /// Fails with `Unauthorized` when no session is held, so callers can
    /// route straight to the login screen without a round trip.
    pub(crate) fn request_with_session(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        let session = self.session.as_ref().ok_or(PortalError::Unauthorized)?;
        let builder = self.request(method, endpoint)?;
        Ok(builder.header(
            header::COOKIE,
            format!("{SESSION_COOKIE}={}", session.access_token),
        ))
    }

    /// Send a request and decode the JSON response body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| PortalError::InvalidResponse(err.to_string()))
    }

    /// Send a request where only the status matters
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Send a request and hand back the successful raw response
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }
}

/// Map non-2xx statuses onto the error taxonomy.
///
/// 401/403 collapse into `Unauthorized`; other failures keep the backend's
/// `message`/`error` field when the body carries one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(PortalError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    Err(PortalError::api_error(status, api_message(status, &body)))
}

fn api_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|field| field.as_str()) {
                return message.to_string();
            }
        }
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Extract the session cookie value from login response headers
pub(crate) fn extract_session_token(headers: &HeaderMap) -> Option<SessionToken> {
    for value in headers.get_all(header::SET_COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        let Some(pair) = raw.split(';').next() else {
            continue;
        };
        let mut parts = pair.splitn(2, '=');
        let name = parts.next().unwrap_or_default().trim();
        if name != SESSION_COOKIE {
            continue;
        }
        if let Some(token) = parts.next() {
            let token = token.trim();
            if !token.is_empty() {
                return Some(SessionToken::new(token));
            }
        }
    }
    None
}
