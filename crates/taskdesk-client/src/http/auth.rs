/*
[INPUT]:  Credential forms and the session cookie
[OUTPUT]: Authenticated session, current-user profile, department list
[POS]:    HTTP layer - auth and account endpoints
[UPDATE]: When auth endpoints or session handling change
*/

use reqwest::Method;
use tracing::debug;

use super::client::{extract_session_token, PortalClient, SessionToken};
use super::error::{PortalError, Result};
use crate::types::{Department, LoginRequest, RegisterRequest, UserProfile};

impl PortalClient {
    /// Authenticate and store the session cookie
    ///
    /// POST /auth/login
    pub async fn login(&mut self, request: &LoginRequest) -> Result<SessionToken> {
        let builder = self.request(Method::POST, "/auth/login")?.json(request);
        let response = self.send_raw(builder).await?;

        let token = extract_session_token(response.headers()).ok_or_else(|| {
            PortalError::InvalidResponse(
                "login response did not set an accessToken cookie".to_string(),
            )
        })?;

        debug!(email = %request.email, "login succeeded");
        self.set_session(token.clone());
        Ok(token)
    }

    /// Create a new account; the caller signs in afterwards
    ///
    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let builder = self.request(Method::POST, "/auth/register")?.json(request);
        self.send_unit(builder).await
    }

    /// End the backend session and drop the local token
    ///
    /// POST /auth/logout
    pub async fn logout(&mut self) -> Result<()> {
        let builder = self.request_with_session(Method::POST, "/auth/logout")?;
        let result = self.send_unit(builder).await;
        // The local token is gone either way; a failed logout must not
        // leave the client believing it still has a session.
        self.clear_session();
        result
    }

    /// Resolve the current user from the session cookie
    ///
    /// GET /auth/me
    pub async fn me(&self) -> Result<UserProfile> {
        let builder = self.request_with_session(Method::GET, "/auth/me")?;
        self.send_json(builder).await
    }

    /// List departments for the registration form
    ///
    /// GET /departments
    pub async fn departments(&self) -> Result<Vec<Department>> {
        let builder = self.request(Method::GET, "/departments")?;
        self.send_json(builder).await
    }
}
