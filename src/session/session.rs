//! Session state.
//!
//! A [`Session`] owns the API client and the session token. Lifecycle calls
//! (`login`, `logout`, `close`) take `&mut self`, every other operation takes
//! `&self`, so a session cannot be logged out while a request on it is in
//! flight.

use std::fmt;

use reqwest::Url;

use crate::api::ApiClient;
use crate::config::ConfigOptions;
use crate::error::{FileStationError, Result};

/// Server details reported by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    pub version: String,
    pub build: String,
    pub admin_group: bool,
}

/// An authenticated (or not yet authenticated) File Station session.
#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    options: ConfigOptions,
    pub(crate) server: Option<ServerInfo>,
}

impl Session {
    /// Connect to a storage appliance and log in.
    ///
    /// `host` may omit the scheme, in which case `https://` is assumed.
    /// When `options` is `None` the defaults are used.
    ///
    /// # Example
    /// ```no_run
    /// use filestation::Session;
    ///
    /// # async fn example() -> filestation::Result<()> {
    /// let mut session = Session::connect("nas.local:8443", "admin", "secret", None).await?;
    /// for share in session.list_shares().await? {
    ///     println!("{}", share.path);
    /// }
    /// session.close().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(
        host: &str,
        username: &str,
        password: &str,
        options: Option<ConfigOptions>,
    ) -> Result<Self> {
        let mut session = Self::new(host, options.unwrap_or_default())?;
        session.login(username, password).await?;
        Ok(session)
    }

    /// Create an unauthenticated session. Call [`Session::login`] before
    /// issuing any file operation.
    pub fn new(host: &str, options: ConfigOptions) -> Result<Self> {
        let url = normalize_host(host)?;
        let api = ApiClient::new(&url, &options)?;
        Ok(Self {
            api,
            options,
            server: None,
        })
    }

    /// The fully-qualified host URL.
    pub fn host(&self) -> &str {
        self.api.host()
    }

    /// The configuration this session was created with.
    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Get the current session ID, if logged in.
    pub fn session_id(&self) -> Option<&str> {
        self.api.session_id()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_id().is_some()
    }

    /// Server details from the last successful login.
    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.server.as_ref()
    }

    pub fn server_version(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.version.as_str())
    }

    pub fn server_build(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.build.as_str())
    }

    /// Whether the logged-in user belongs to the administrators group.
    pub fn is_admin(&self) -> bool {
        self.server.as_ref().is_some_and(|s| s.admin_group)
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    pub(crate) fn api_mut(&mut self) -> &mut ApiClient {
        &mut self.api
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// Turn `nas.local:8443` into `https://nas.local:8443`, keep explicit schemes.
pub(crate) fn normalize_host(host: &str) -> Result<String> {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return Err(FileStationError::InvalidUrl("host cannot be empty".into()));
    }

    let lower = host.to_ascii_lowercase();
    let url = if lower.starts_with("http://") || lower.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    Url::parse(&url).map_err(|e| FileStationError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(url)
}
