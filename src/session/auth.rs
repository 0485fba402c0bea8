use serde::Deserialize;
use tracing::{info, warn};

use super::session::{ServerInfo, Session};
use crate::api::{ApiRequest, LOGIN_SCRIPT, LOGOUT_SCRIPT, StatusCode, check_status};
use crate::base64::encode_password;
use crate::error::{FileStationError, Result};
use crate::fs::StatusOnlyResponse;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    status: i64,
    #[serde(default)]
    version: String,
    #[serde(default)]
    build: String,
    #[serde(default)]
    sid: String,
    #[serde(default)]
    admingroup: i64,
}

impl Session {
    /// Log in with username and password.
    ///
    /// Any existing session is logged out first. A failure of that logout is
    /// logged and ignored so it cannot block the new login.
    ///
    /// On a non-success status the session stays unauthenticated and the
    /// status is returned as an error.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if self.is_authenticated() {
            if let Err(e) = self.logout().await {
                warn!(host = %self.host(), error = %e, "Discarding failed logout before re-login");
            }
        }

        let request = ApiRequest::get(LOGIN_SCRIPT)
            .param("user", username)
            .param("pwd", encode_password(password));

        let response: LoginResponse = self.api().request(&request).await?;

        if !StatusCode::from(response.status).is_success() {
            warn!(
                host = %self.host(),
                username = %username,
                status = response.status,
                "Login failed"
            );
            return Err(FileStationError::status(response.status));
        }

        if response.sid.is_empty() {
            return Err(FileStationError::InvalidResponse {
                message: "login succeeded without a session id".to_string(),
                body: String::new(),
            });
        }

        self.api_mut().set_session_id(response.sid);
        self.server = Some(ServerInfo {
            version: response.version,
            build: response.build,
            admin_group: response.admingroup != 0,
        });

        info!(host = %self.host(), username = %username, "Login successful");
        Ok(())
    }

    /// Invalidate the session.
    ///
    /// Does nothing when not logged in. The local session id is dropped even
    /// when the server reports a failure, which is then returned.
    pub async fn logout(&mut self) -> Result<()> {
        if !self.is_authenticated() {
            return Ok(());
        }

        let result = self
            .api()
            .request::<StatusOnlyResponse>(&ApiRequest::get(LOGOUT_SCRIPT))
            .await;

        self.api_mut().clear_session_id();
        self.server = None;

        check_status(result?.status)?;
        info!(host = %self.host(), "Logged out");
        Ok(())
    }

    /// Close the session. Same as [`Session::logout`].
    pub async fn close(&mut self) -> Result<()> {
        self.logout().await
    }
}
