//! File Station API client with request/response handling.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::status::StatusCode;
use crate::config::ConfigOptions;
use crate::error::{FileStationError, Result};
use crate::http::HttpClient;

/// Login script.
pub const LOGIN_SCRIPT: &str = "cgi-bin/filemanager/wfm2Login.cgi";
/// Logout script.
pub const LOGOUT_SCRIPT: &str = "cgi-bin/filemanager/wfm2Logout.cgi";
/// Generic file manager script, dispatched by the `func` parameter.
pub const UTIL_SCRIPT: &str = "cgi-bin/filemanager/utilRequest.cgi";

/// Query parameters passed to a CGI script.
pub type QueryParams = BTreeMap<String, String>;

/// A single outbound API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub script: String,
    pub params: QueryParams,
    pub body: Option<String>,
    pub content_type: Option<String>,
}

impl ApiRequest {
    /// Create a GET request against a script.
    pub fn get(script: &str) -> Self {
        Self {
            method: Method::GET,
            script: script.to_string(),
            params: QueryParams::new(),
            body: None,
            content_type: None,
        }
    }

    /// Create a POST request carrying a body.
    pub fn post(script: &str, body: impl Into<String>, content_type: &str) -> Self {
        Self {
            method: Method::POST,
            script: script.to_string(),
            params: QueryParams::new(),
            body: Some(body.into()),
            content_type: Some(content_type.to_string()),
        }
    }

    /// Convenience for a `utilRequest.cgi` call with the given `func`.
    pub fn util(func: &str) -> Self {
        Self::get(UTIL_SCRIPT).param("func", func)
    }

    /// Add a query parameter, replacing any previous value for the key.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }
}

/// Minimal shape every File Station response shares.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: i64,
}

/// File Station API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    host: String,
    session_id: Option<String>,
}

impl ApiClient {
    /// Create a new API client for a fully-qualified host URL.
    pub fn new(host: &str, options: &ConfigOptions) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
            host: host.trim_end_matches('/').to_string(),
            session_id: None,
        })
    }

    /// The host URL requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Set the session ID for authenticated requests.
    pub fn set_session_id(&mut self, sid: String) {
        self.session_id = Some(sid);
    }

    /// Clear the session ID.
    pub fn clear_session_id(&mut self) {
        self.session_id = None;
    }

    /// Get the current session ID, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|sid| !sid.is_empty())
    }

    fn url_for(&self, script: &str) -> String {
        format!("{}/{}", self.host, script.trim_start_matches('/'))
    }

    /// Send a request and return the raw response body.
    ///
    /// The session ID is added as `sid` whenever one is set.
    pub async fn request_raw(&self, request: &ApiRequest) -> Result<String> {
        let mut params = request.params.clone();
        if let Some(sid) = self.session_id() {
            params.insert("sid".to_string(), sid.to_string());
        }

        let url = self.url_for(&request.script);
        debug!(
            method = %request.method,
            script = %request.script,
            func = request.params.get("func").map(String::as_str).unwrap_or(""),
            "api request"
        );

        let body = match (&request.body, &request.content_type) {
            (Some(body), Some(content_type)) => Some((body.as_str(), content_type.as_str())),
            (Some(body), None) => Some((body.as_str(), "application/json")),
            (None, _) => None,
        };

        let response = self
            .http
            .send(request.method.clone(), &url, &params, body)
            .await?;

        debug!(script = %request.script, bytes = response.len(), "api response");
        Ok(response)
    }

    /// Send a request and decode the JSON body into `T`.
    pub async fn request<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let body = self.request_raw(request).await?;
        decode_response(&body)
    }
}

/// Decode a response body into `T`.
///
/// When the body does not fit `T`, it is decoded as a bare `{"status": n}`
/// so the vendor's own status surfaces instead of a shape mismatch.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Err(FileStationError::InvalidResponse {
            message: "empty response body".to_string(),
            body: String::new(),
        });
    }

    let err = match serde_json::from_str::<T>(body) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    match serde_json::from_str::<StatusResponse>(body) {
        Ok(status) if !StatusCode::from(status.status).is_success() => {
            Err(FileStationError::status(status.status))
        }
        _ => Err(FileStationError::InvalidResponse {
            message: err.to_string(),
            body: body.to_string(),
        }),
    }
}
